//! # Seed Data Generator
//!
//! Fills an empty database with a small warung catalog for development.
//!
//! ## Usage
//! ```bash
//! # Seed ./kasir.db with every demo product
//! cargo run -p kasir-db --bin seed
//!
//! # Only the first 10 products, into another file
//! cargo run -p kasir-db --bin seed -- --count 10 --db ./data/kasir.db
//! ```
//!
//! Products are grouped by category (`category_id`, `category_name`).
//! Prices are whole Rupiah; stock cycles through 10..=59.

use std::env;

use kasir_core::{Money, ProductInput};
use kasir_db::{Database, DbConfig};

/// `(category_id, category_name, [(product name, price)])`
const CATALOG: &[(i64, &str, &[(&str, i64)])] = &[
    (
        1,
        "Makanan",
        &[
            ("Indomie Goreng", 3500),
            ("Indomie Soto", 3300),
            ("Mie Sedaap Goreng", 3400),
            ("Roti Tawar", 16000),
            ("Chitato Sapi Panggang", 11000),
            ("Beng-Beng", 2500),
            ("Oreo", 9000),
            ("Telur Ayam (10)", 28000),
        ],
    ),
    (
        2,
        "Minuman",
        &[
            ("Teh Botol Sosro", 6000),
            ("Aqua 600ml", 4000),
            ("Aqua 1500ml", 7000),
            ("Kopi Kapal Api Mix", 2000),
            ("Good Day Cappuccino", 2500),
            ("Pocari Sweat", 8000),
            ("Ultra Milk Coklat", 6500),
        ],
    ),
    (
        3,
        "Sembako",
        &[
            ("Beras 5kg", 72000),
            ("Gula Pasir 1kg", 15000),
            ("Minyak Goreng 2L", 36000),
            ("Garam Dapur", 4000),
            ("Tepung Terigu 1kg", 13000),
            ("Kecap Manis Bango", 11500),
        ],
    ),
    (
        4,
        "Kebersihan",
        &[
            ("Sabun Lifebuoy", 4500),
            ("Pepsodent 190g", 14000),
            ("Rinso 800g", 24000),
            ("Sunlight 755ml", 17000),
        ],
    ),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut count: usize = usize::MAX;
    let mut db_path = String::from("./kasir.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse()?;
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Kasir POS Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Maximum number of products (default: all)");
                println!("  -d, --db <PATH>    Database file path (default: ./kasir.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Kasir POS Seed Data Generator");
    println!("=============================");
    println!("Database: {}", db_path);
    println!();

    let db = Database::new(DbConfig::new(&db_path).max_connections(1)).await?;
    println!("✓ Connected, migrations applied");

    let existing = db.products().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} products", existing);
        println!("  Skipping seed to avoid duplicates.");
        return Ok(());
    }

    let repo = db.products();
    let mut generated = 0;

    'catalog: for (category_id, category_name, products) in CATALOG {
        for (name, price) in products.iter() {
            if generated >= count {
                break 'catalog;
            }

            let input = ProductInput {
                name: name.to_string(),
                price: Money::new(*price),
                stock: 10 + (generated as i64 * 7) % 50,
                category_id: *category_id,
                category_name: category_name.to_string(),
            };

            match repo.create(&input).await {
                Ok(product) => {
                    println!("  #{:<3} {:<28} Rp {:>8}", product.id, product.name, product.price);
                    generated += 1;
                }
                Err(e) => eprintln!("Failed to insert {}: {}", name, e),
            }
        }
    }

    println!();
    println!("✓ Seeded {} products", generated);

    db.close().await;
    Ok(())
}
