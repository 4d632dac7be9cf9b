//! Marketplace catalog
//!
//! Static product listings with simulated market price fluctuation applied at
//! read time.

use chrono::Utc;
use rand::Rng;
use serde::Serialize;

use crate::error::{AppError, AppResult};

/// A catalog entry as served to clients.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogItem {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub base_price_inr: u32,
    pub current_price_inr: u32,
    pub price_change_inr: i64,
    pub rating: f64,
    pub stock: u32,
    pub last_updated: String,
}

struct Listing {
    id: u32,
    name: &'static str,
    description: &'static str,
    category: &'static str,
    price_inr: u32,
    rating: f64,
    stock: u32,
}

const LISTINGS: &[Listing] = &[
    Listing {
        id: 1,
        name: "Urea (46-0-0)",
        description: "High nitrogen content fertilizer ideal for leafy growth and chlorophyll production. Perfect for cereals and vegetables.",
        category: "fertilizer",
        price_inr: 550,
        rating: 4.5,
        stock: 150,
    },
    Listing {
        id: 2,
        name: "DAP (18-46-0)",
        description: "Diammonium phosphate rich in phosphorus for strong root development and early plant establishment.",
        category: "fertilizer",
        price_inr: 1200,
        rating: 4.7,
        stock: 89,
    },
    Listing {
        id: 3,
        name: "MOP (0-0-60)",
        description: "Muriate of potash providing essential potassium for fruit quality, disease resistance, and overall plant health.",
        category: "fertilizer",
        price_inr: 800,
        rating: 4.3,
        stock: 200,
    },
    Listing {
        id: 4,
        name: "NPK Complex (16-16-16)",
        description: "Balanced fertilizer providing equal amounts of nitrogen, phosphorus, and potassium for general crop nutrition.",
        category: "fertilizer",
        price_inr: 900,
        rating: 4.4,
        stock: 120,
    },
    Listing {
        id: 5,
        name: "Hybrid Rice Seeds (IR64)",
        description: "High-yielding hybrid rice variety with excellent grain quality and disease resistance. Suitable for both Kharif and Rabi seasons.",
        category: "seeds",
        price_inr: 1500,
        rating: 4.8,
        stock: 45,
    },
    Listing {
        id: 6,
        name: "Wheat Seeds (HD-2967)",
        description: "Dwarf variety wheat seeds with high protein content. Drought-tolerant and suitable for late sowing conditions.",
        category: "seeds",
        price_inr: 850,
        rating: 4.6,
        stock: 60,
    },
    Listing {
        id: 7,
        name: "Tomato Seeds (Hybrid)",
        description: "Determinate hybrid tomato variety with uniform fruit size and resistance to bacterial wilt.",
        category: "seeds",
        price_inr: 3500,
        rating: 4.4,
        stock: 50,
    },
    Listing {
        id: 8,
        name: "Knapsack Sprayer (16L)",
        description: "High-pressure manual sprayer for pesticide and fertilizer application with adjustable nozzle settings.",
        category: "equipment",
        price_inr: 2500,
        rating: 4.3,
        stock: 25,
    },
    Listing {
        id: 9,
        name: "Soil pH Meter",
        description: "Digital soil pH and moisture meter for field testing. Instant readings with temperature compensation.",
        category: "equipment",
        price_inr: 1200,
        rating: 4.4,
        stock: 35,
    },
    Listing {
        id: 10,
        name: "Drip Irrigation Kit (1 Acre)",
        description: "Complete drip irrigation system including filters, pressure regulators, and emitter lines with fittings.",
        category: "equipment",
        price_inr: 25000,
        rating: 4.9,
        stock: 15,
    },
    Listing {
        id: 11,
        name: "Vermicompost",
        description: "Earthworm processed organic fertilizer rich in nutrients. Improves soil fertility and water retention capacity.",
        category: "organic",
        price_inr: 650,
        rating: 4.8,
        stock: 180,
    },
    Listing {
        id: 12,
        name: "Neem Oil Concentrate",
        description: "Pure neem oil extract for organic pest control. Effective against aphids, thrips, and whiteflies.",
        category: "organic",
        price_inr: 280,
        rating: 4.5,
        stock: 120,
    },
];

/// Catalog service
#[derive(Clone, Default)]
pub struct CatalogService;

impl CatalogService {
    /// Create a new CatalogService instance
    pub fn new() -> Self {
        Self
    }

    /// List products, optionally filtered by category, with current prices.
    ///
    /// Unknown categories are rejected rather than silently returning an
    /// empty list.
    pub fn list(&self, category: Option<&str>) -> AppResult<Vec<CatalogItem>> {
        if let Some(category) = category {
            if category != "all" && !LISTINGS.iter().any(|l| l.category == category) {
                return Err(AppError::NotFound(format!(
                    "Product category '{}'",
                    category
                )));
            }
        }

        let mut rng = rand::rng();
        let now = Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();

        let items = LISTINGS
            .iter()
            .filter(|l| match category {
                Some(c) if c != "all" => l.category == c,
                _ => true,
            })
            .map(|l| {
                // Market prices drift by up to 5% in either direction.
                let fluctuation: f64 = rng.random_range(0.95..=1.05);
                let current = (f64::from(l.price_inr) * fluctuation) as u32;
                CatalogItem {
                    id: l.id,
                    name: l.name,
                    description: l.description,
                    category: l.category,
                    base_price_inr: l.price_inr,
                    current_price_inr: current,
                    price_change_inr: i64::from(current) - i64::from(l.price_inr),
                    rating: l.rating,
                    stock: l.stock,
                    last_updated: now.clone(),
                }
            })
            .collect();

        Ok(items)
    }
}
