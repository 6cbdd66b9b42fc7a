use chrono::Days;
use fatura::core::*;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    // Due one week from today, moved to Monday if that lands on a Sunday
    let today = SystemClock.today();
    let mut due = CalendarDate::from(today + Days::new(7));
    if due.is_sunday() {
        due = CalendarDate::from(due.as_naive() + Days::new(1));
    }

    let invoice = create_invoice(
        1,
        "71112917000126",
        &due.to_string(),
        "moveis planejados",
        "1500",
    )
    .expect("invoice should be valid");

    println!("Fatura:     {}", invoice.number());
    println!("CNPJ:       {}", format_cnpj(invoice.tax_id()).unwrap_or_default());
    println!("Emissao:    {}", invoice.issue_date());
    println!("Vencimento: {} ({} dias)", invoice.due_date(), invoice.days_until_due());
    println!("Servico:    {}", invoice.description());
    println!("Valor:      {}", invoice.formatted_amount());
}
