//! Data-seeding CLI: `seed-products <amount>` inserts random example products.
//! Individual insert failures are reported and do not abort the run.
use anyhow::{anyhow, Context};
use migration::MigratorTrait;
use rand::Rng;
use tracing::{error, info};

const WORDS: &[&str] = &[
    "amber", "brisk", "cedar", "dapper", "ember", "frosty", "gilded", "hollow", "ivory",
    "jolly", "keen", "lunar", "mellow", "nimble", "opal", "plush", "quiet", "rustic",
    "sleek", "tidal", "umber", "vivid", "woven", "zesty",
];

fn random_product() -> (String, i32, f64) {
    let mut rng = rand::thread_rng();
    let name = format!(
        "{} {} {}",
        WORDS[rng.gen_range(0..WORDS.len())],
        WORDS[rng.gen_range(0..WORDS.len())],
        WORDS[rng.gen_range(0..WORDS.len())]
    );
    let stock = rng.gen_range(0..100);
    let price = (rng.gen_range(0.0..100.0_f64) * 100.0).round() / 100.0;
    (name, stock, price)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    common::utils::logging::init_logging_default();

    let amount: u32 = std::env::args()
        .nth(1)
        .ok_or_else(|| anyhow!("usage: seed-products <amount>"))?
        .parse()
        .context("amount must be a non-negative integer")?;

    let db = models::db::connect().await?;
    migration::Migrator::up(&db, None).await?;

    let mut created = 0u32;
    for _ in 0..amount {
        let (name, stock, price) = random_product();
        match models::product::create(&db, &name, stock, price).await {
            Ok(p) => {
                created += 1;
                info!(product_id = p.id, name = %p.name, stock, price, "generated product");
            }
            Err(e) => error!(error = %e, "error while generating this product"),
        }
    }

    info!(created, requested = amount, "product seeding finished");
    Ok(())
}
