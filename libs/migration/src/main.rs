use migration::Migrator;
use sea_orm_migration::cli;

/// `DATABASE_URL=sqlite://database.sqlite3?mode=rwc cargo run -p migration -- up`
#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
