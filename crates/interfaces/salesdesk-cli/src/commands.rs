use crate::render::{sale_line, salesperson_line, NameStyle};
use anyhow::{anyhow, bail, Context, Result};
use salesdesk_app_core::{
    Console, ConsoleSettings, DetailPhase, FavoriteChannel, FavoriteDisplay, FilePersistence,
    Mutation, RowEvent, SalesController, SalespeopleController, SalespersonDetail,
    SalespersonRow, View,
};
use salesdesk_core::{RecordId, Sale};
use std::io::Write;
use tokio::sync::mpsc;

/// Fields for a new or edited sale.
#[derive(Debug, Clone)]
pub struct SaleInput {
    pub customer_first_name: String,
    pub customer_last_name: String,
    pub date: String,
    pub total: f64,
    pub salesperson_id: RecordId,
}

impl SaleInput {
    fn into_sale(self, id: RecordId) -> Sale {
        Sale::new(
            id,
            self.customer_first_name,
            self.customer_last_name,
            self.date,
            self.total,
            self.salesperson_id,
        )
    }
}

fn print_sales(out: &mut dyn Write, list: &SalesController, style: NameStyle) -> Result<()> {
    let records = list.records();
    writeln!(out, ":: {} sale(s)", records.len())?;
    for sale in &records {
        writeln!(out, "{}", sale_line(sale, style))?;
    }
    Ok(())
}

fn print_salespeople(
    out: &mut dyn Write,
    list: &SalespeopleController,
    style: NameStyle,
    favorite: &str,
) -> Result<()> {
    let records = list.records();
    writeln!(out, ":: {} salespeople", records.len())?;
    for sp in &records {
        let is_fave = !favorite.is_empty() && sp.favorite_name() == favorite;
        writeln!(out, "{}", salesperson_line(sp, style, is_fave))?;
    }
    Ok(())
}

fn print_detail(out: &mut dyn Write, detail: &SalespersonDetail, style: NameStyle) -> Result<()> {
    match detail.phase() {
        DetailPhase::Resolved => {
            let sp = detail.salesperson();
            writeln!(out, ":: Salesperson #{}", sp.id)?;
            writeln!(out, "   Name:       {}", style.name(&sp.full_name()))?;
            writeln!(out, "   Department: {}", sp.department)?;
            writeln!(out, "   Hired:      {}", sp.hire_date)?;
            writeln!(out, "   Salary:     {:.0}", sp.salary)?;
        }
        DetailPhase::Failed => {
            let failure = detail.failure();
            writeln!(
                out,
                ":: Could not load salesperson '{}' (status {})",
                failure.id, failure.status
            )?;
        }
        DetailPhase::Loading => writeln!(out, ":: Loading salesperson…")?,
    }
    Ok(())
}

/// Report the mutation outcome; the list was already re-read either way.
fn finish_mutation<T>(what: &str, mutation: Mutation<T>) -> Result<()> {
    if let Err(e) = &mutation.refresh {
        tracing::warn!("list could not be reloaded after {what}: {e}");
    }
    mutation
        .result
        .map(|_| ())
        .map_err(|e| anyhow!("{what} failed: {e}"))
}

pub async fn cmd_list_sales(
    console: &Console,
    style: NameStyle,
    json: bool,
    out: &mut dyn Write,
) -> Result<()> {
    let list = console.sales();
    list.refresh().await.context("Could not load sales")?;
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&list.records())?)?;
        return Ok(());
    }
    print_sales(out, &list, style)
}

pub async fn cmd_add_sale(
    console: &Console,
    input: SaleInput,
    style: NameStyle,
    out: &mut dyn Write,
) -> Result<()> {
    let list = console.sales();
    let mutation = list.create(&input.into_sale(salesdesk_core::UNSAVED_ID)).await?;
    if let Ok(created) = &mutation.result {
        match &created.body {
            Some(sale) => writeln!(out, ":: Created sale #{}", sale.id)?,
            None => writeln!(out, ":: Sale created (status {})", created.status)?,
        }
    }
    finish_mutation("create", mutation)?;
    print_sales(out, &list, style)
}

pub async fn cmd_update_sale(
    console: &Console,
    id: RecordId,
    input: SaleInput,
    style: NameStyle,
    out: &mut dyn Write,
) -> Result<()> {
    let list = console.sales();
    let mutation = list.update(id, &input.into_sale(id)).await?;
    finish_mutation("update", mutation)?;
    writeln!(out, ":: Updated sale #{id}")?;
    print_sales(out, &list, style)
}

pub async fn cmd_delete_sale(
    console: &Console,
    id: RecordId,
    style: NameStyle,
    out: &mut dyn Write,
) -> Result<()> {
    let list = console.sales();
    let mutation = list.delete(id).await?;
    finish_mutation("delete", mutation)?;
    writeln!(out, ":: Deleted sale #{id}")?;
    print_sales(out, &list, style)
}

pub async fn cmd_list_salespeople(
    console: &Console,
    style: NameStyle,
    json: bool,
    out: &mut dyn Write,
) -> Result<()> {
    let list = console.salespeople();
    list.refresh().await.context("Could not load salespeople")?;
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&list.records())?)?;
        return Ok(());
    }
    print_salespeople(out, &list, style, &console.favorites().current())
}

pub async fn cmd_delete_salesperson(
    console: &Console,
    id: RecordId,
    style: NameStyle,
    out: &mut dyn Write,
) -> Result<()> {
    let list = console.salespeople();
    let mutation = list.delete(id).await?;
    finish_mutation("delete", mutation)?;
    writeln!(out, ":: Deleted salesperson #{id}")?;
    print_salespeople(out, &list, style, &console.favorites().current())
}

/// Open a navigation path (`sales`, `salespeople`, `salesperson/{id}`) and print its view.
pub async fn cmd_open(
    console: &Console,
    path: &str,
    style: NameStyle,
    out: &mut dyn Write,
) -> Result<()> {
    match console.open_path(path).await? {
        View::Sales(list) => {
            if let Some(e) = list.last_error() {
                tracing::warn!("sales could not be loaded: {e}");
            }
            print_sales(out, &list, style)
        }
        View::Salespeople(list) => {
            if let Some(e) = list.last_error() {
                tracing::warn!("salespeople could not be loaded: {e}");
            }
            print_salespeople(out, &list, style, &console.favorites().current())
        }
        View::SalespersonDetail(detail) => print_detail(out, &detail, style),
    }
}

/// Offline walk-through of the mock salespeople list: pick a favorite,
/// give a raise and delete someone, all through row events.
///
/// Needs no record service, only the favorite channel the rows share.
pub async fn cmd_demo(
    favorites: &FavoriteChannel,
    style: NameStyle,
    out: &mut dyn Write,
) -> Result<()> {
    let list = SalespeopleController::mock();
    let header = FavoriteDisplay::new(favorites);
    let (tx, mut rx) = mpsc::unbounded_channel::<RowEvent>();

    let rows: Vec<SalespersonRow> = list
        .records()
        .into_iter()
        .map(|sp| SalespersonRow::new(sp, favorites, tx.clone()))
        .collect();
    drop(tx);

    writeln!(out, ":: Demo staff")?;
    print_salespeople(out, &list, style, &header.shown())?;

    let [first, second, third, ..] = rows.as_slice() else {
        bail!("demo needs at least three salespeople");
    };
    first.select_favorite()?;
    second.request_raise()?;
    third.request_delete()?;
    drop(rows);

    while let Some(event) = rx.recv().await {
        writeln!(out, "-> {event:?}")?;
        list.handle_row_event(event).await?;
    }

    writeln!(out, ":: Favorite: {}", style.name(&header.shown()))?;
    print_salespeople(out, &list, style, &header.shown())
}

pub fn cmd_config_show(persistence: &FilePersistence, out: &mut dyn Write) -> Result<()> {
    let settings = persistence.load_settings()?;
    writeln!(out, ":: Settings file: {}", persistence.settings_path()?.display())?;
    writeln!(out, "   Base URL:  {}", settings.base_url)?;
    writeln!(out, "   Effective: {}", settings.effective_base_url())?;
    writeln!(out, "   Timeout:   {}s", settings.request_timeout().as_secs())?;
    Ok(())
}

pub fn cmd_config_set(
    persistence: &FilePersistence,
    base_url: Option<String>,
    timeout_secs: Option<u64>,
) -> Result<ConsoleSettings> {
    let mut settings = persistence.load_settings()?;
    if let Some(url) = base_url {
        salesdesk_infra::parse_base_url(&url)
            .with_context(|| format!("'{url}' is not a usable base URL"))?;
        settings.base_url = url;
    }
    if let Some(secs) = timeout_secs {
        settings.request_timeout_secs = salesdesk_config::clamp_timeout_secs(secs);
    }
    persistence.save_settings(&settings)?;
    Ok(settings)
}
