//! # Seed Data Generator
//!
//! Populates the database with hardware-store products, a few clients, and
//! some sales so the reports have something to show.
//!
//! ## Usage
//! ```bash
//! # 60 products (default)
//! cargo run -p ironmonger-db --bin seed
//!
//! # Custom amount
//! cargo run -p ironmonger-db --bin seed -- --count 200
//!
//! # Specify database path
//! cargo run -p ironmonger-db --bin seed -- --db ./data/ironmonger.db
//! ```
//!
//! Each product is `{item} {variant}` with a deterministic price and stock
//! derived from its index, so reruns against a fresh file give the same data.

use std::env;

use ironmonger_core::service::SaleService;
use ironmonger_core::{NewClient, NewProduct, NewSale, SaleLine};
use ironmonger_db::{Database, DbConfig};

/// Base items with their base price in cents.
const ITEMS: &[(&str, i64)] = &[
    ("Claw hammer", 1250),
    ("Sledgehammer", 3900),
    ("Phillips screwdriver", 450),
    ("Flathead screwdriver", 420),
    ("Adjustable wrench", 1575),
    ("Pipe wrench", 2290),
    ("Tape measure", 899),
    ("Spirit level", 1340),
    ("Hand saw", 1890),
    ("Hacksaw", 1120),
    ("Box of nails", 500),
    ("Wood screws", 399),
    ("Drywall anchors", 650),
    ("Cement bag", 850),
    ("Paint", 2000),
    ("Paint roller", 725),
    ("Paint brush", 310),
    ("Sandpaper", 180),
    ("Duct tape", 540),
    ("Work gloves", 995),
];

/// Variants and their price addon in cents.
const VARIANTS: &[(&str, i64)] = &[
    ("Standard", 0),
    ("Heavy duty", 450),
    ("Pro", 900),
];

const CLIENTS: &[(&str, &str, &str)] = &[
    ("Ana Torres", "0912345678", "ana.torres@example.com"),
    ("Luis Pérez", "1723456789", "luis.perez@example.com"),
    ("María Gómez", "0923456781", "maria.gomez@example.com"),
    ("Carlos Ruiz", "1734567892", "carlos.ruiz@example.com"),
    ("Elena Vargas", "0945678123", "elena.vargas@example.com"),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut count: usize = 60;
    let mut db_path = String::from("./data.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(60);
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
                println!("Ironmonger Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of products to generate (default: 60)");
                println!("  -d, --db <PATH>    Database file path (default: ./data.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Ironmonger Seed Data Generator");
    println!("================================");
    println!("Database: {}", db_path);
    println!("Products: {}", count);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    let existing = db.products().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} products", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    println!();
    println!("Generating products...");

    let start = std::time::Instant::now();
    let mut product_ids = Vec::with_capacity(count);

    for index in 0..count {
        let product = generate_product(index);
        match db.products().insert(&product).await {
            Ok(created) => product_ids.push((created.id, created.price_cents)),
            Err(e) => eprintln!("Failed to insert {}: {}", product.name, e),
        }
    }

    println!("✓ Generated {} products in {:?}", product_ids.len(), start.elapsed());

    let mut client_ids = Vec::with_capacity(CLIENTS.len());
    for (name, national_id, email) in CLIENTS {
        let client = NewClient {
            name: name.to_string(),
            national_id: national_id.to_string(),
            email: email.to_string(),
        };
        match db.clients().insert(&client).await {
            Ok(created) => client_ids.push(created.id),
            Err(e) => eprintln!("Failed to insert client {}: {}", name, e),
        }
    }

    println!("✓ Registered {} clients", client_ids.len());

    // A handful of sales through the same path the API uses.
    let sales = SaleService::new(db.sales());
    let mut recorded = 0;
    for (n, client_id) in client_ids.iter().enumerate() {
        let items: Vec<SaleLine> = product_ids
            .iter()
            .skip(n * 3)
            .take(2)
            .enumerate()
            .map(|(k, (product_id, price_cents))| SaleLine {
                product_id: *product_id,
                quantity: (k + 1) as i64,
                unit_price_cents: *price_cents,
            })
            .collect();

        if items.is_empty() {
            break;
        }

        let request = NewSale {
            client_id: *client_id,
            items,
        };
        match sales.create_sale(&request).await {
            Ok(_) => recorded += 1,
            Err(e) => eprintln!("Failed to record sale for client {}: {}", client_id, e),
        }
    }

    println!("✓ Recorded {} sales", recorded);
    println!();
    println!("✓ Seed complete!");

    db.close().await;
    Ok(())
}

/// Generates a single product with deterministic data.
fn generate_product(index: usize) -> NewProduct {
    let (item, base_price) = ITEMS[index % ITEMS.len()];
    let (variant, addon) = VARIANTS[(index / ITEMS.len()) % VARIANTS.len()];

    // Past one full round of variants, number the batch to keep names distinct.
    let round = index / (ITEMS.len() * VARIANTS.len());
    let name = if round == 0 {
        format!("{} {}", item, variant)
    } else {
        format!("{} {} #{}", item, variant, round + 1)
    };

    NewProduct {
        name,
        stock: 5 + ((index * 37) % 96) as i64,
        price_cents: base_price + addon,
    }
}
