//! Fixed sample rows loaded by [`DataStore::seeded`](crate::DataStore::seeded).
//!
//! Purchase orders and inventory movements start empty; the business enters
//! those through the UI.

use chrono::NaiveDate;

use mayanfruit_core::RecordId;
use mayanfruit_parties::{Customer, CustomerOrigin, Supplier};
use mayanfruit_products::{
    FruitFinish, FruitGrade, FruitItem, RequiredSupply, SupplyCategory,
};
use mayanfruit_sales::{OrderLine, SalesOrder, SalesOrderStatus};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    // Seed dates are compile-time constants; the unwrap cannot fire.
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}

pub fn fruit() -> Vec<FruitItem> {
    vec![
        FruitItem {
            id: RecordId::new("FRU-001"),
            name: "Fresas".to_string(),
            grade: FruitGrade::High,
            weight: 15.0,
            color: "rojo".to_string(),
            finish: FruitFinish::Glossy,
            unit_price: 5.5,
            quantity: 500,
            registered_on: date(2025, 1, 15),
        },
        FruitItem {
            id: RecordId::new("FRU-002"),
            name: "Moras".to_string(),
            grade: FruitGrade::High,
            weight: 8.0,
            color: "morado".to_string(),
            finish: FruitFinish::Glossy,
            unit_price: 4.8,
            quantity: 300,
            registered_on: date(2025, 1, 16),
        },
        FruitItem {
            id: RecordId::new("FRU-003"),
            name: "Cerezas".to_string(),
            grade: FruitGrade::Medium,
            weight: 10.0,
            color: "rojo".to_string(),
            finish: FruitFinish::Matte,
            unit_price: 6.2,
            quantity: 200,
            registered_on: date(2025, 1, 17),
        },
    ]
}

pub fn supplies() -> Vec<RequiredSupply> {
    vec![
        RequiredSupply {
            id: RecordId::new("PRR-001"),
            name: "Fertilizante Premium".to_string(),
            category: SupplyCategory::Fertilizer,
            price: 25.0,
            expires_on: Some(date(2026, 6, 30)),
            size: None,
            specialty: Some("Frutas rojas".to_string()),
            quantity: 100,
            supplier_name: "Agro Solutions".to_string(),
            registered_on: date(2025, 1, 10),
        },
        RequiredSupply {
            id: RecordId::new("PRR-002"),
            name: "Abono Orgánico".to_string(),
            category: SupplyCategory::Compost,
            price: 18.5,
            expires_on: Some(date(2026, 12, 31)),
            size: None,
            specialty: None,
            quantity: 150,
            supplier_name: "EcoAgro".to_string(),
            registered_on: date(2025, 1, 12),
        },
        RequiredSupply {
            id: RecordId::new("PRR-003"),
            name: "Cajas de Empaque".to_string(),
            category: SupplyCategory::PackingBox,
            price: 2.5,
            expires_on: None,
            size: Some("grande".to_string()),
            specialty: None,
            quantity: 5000,
            supplier_name: "Packing Inc".to_string(),
            registered_on: date(2025, 1, 8),
        },
    ]
}

pub fn customers() -> Vec<Customer> {
    vec![
        Customer {
            id: RecordId::new("CLI-001"),
            name: "Distribuidora Central".to_string(),
            origin: CustomerOrigin::Local,
            contact: "Juan García".to_string(),
            email: "juan@distribucentral.com".to_string(),
            phone: "+502 7812-3456".to_string(),
            address: "Ciudad de Guatemala".to_string(),
            company: None,
            available_credit: 10_000.0,
            active: true,
            registered_on: date(2025, 1, 1),
        },
        Customer {
            id: RecordId::new("CLI-002"),
            name: "Export Global".to_string(),
            origin: CustomerOrigin::Foreign,
            contact: "María López".to_string(),
            email: "maria@exportglobal.com".to_string(),
            phone: "+1 305-555-0123".to_string(),
            address: "Miami, USA".to_string(),
            company: None,
            available_credit: 25_000.0,
            active: true,
            registered_on: date(2024, 12, 15),
        },
        Customer {
            id: RecordId::new("CLI-003"),
            name: "Tienda Local ABC".to_string(),
            origin: CustomerOrigin::Local,
            contact: "Carlos Ruiz".to_string(),
            email: "carlos@tiendaabc.com".to_string(),
            phone: "+502 7654-3210".to_string(),
            address: "Antigua, Guatemala".to_string(),
            company: None,
            available_credit: 5_000.0,
            active: true,
            registered_on: date(2024, 11, 20),
        },
    ]
}

pub fn suppliers() -> Vec<Supplier> {
    vec![
        Supplier {
            id: RecordId::new("PRV-001"),
            name: "Agro Solutions".to_string(),
            email: "sales@agrosolutions.com".to_string(),
            phone: "+502 2300-0001".to_string(),
            address: "Petén, Guatemala".to_string(),
            product: "Fertilizantes".to_string(),
            rating: 4.5,
            active: true,
            registered_on: date(2024, 6, 1),
        },
        Supplier {
            id: RecordId::new("PRV-002"),
            name: "EcoAgro".to_string(),
            email: "info@ecoagro.com".to_string(),
            phone: "+502 2300-0002".to_string(),
            address: "Escuintla, Guatemala".to_string(),
            product: "Abonos Orgánicos".to_string(),
            rating: 4.8,
            active: true,
            registered_on: date(2024, 7, 15),
        },
    ]
}

pub fn sales_orders() -> Vec<SalesOrder> {
    vec![
        SalesOrder {
            id: RecordId::new("ORV-001"),
            customer_id: RecordId::new("CLI-001"),
            customer_name: "Distribuidora Central".to_string(),
            lines: vec![
                OrderLine::new("FRU-001", "Fresas", 100, 5.5),
                OrderLine::new("FRU-002", "Moras", 50, 4.8),
            ],
            total: 790.0,
            status: SalesOrderStatus::Delivered,
            ordered_on: date(2025, 1, 20),
            delivered_on: Some(date(2025, 1, 22)),
            discount_pct: 0.0,
            notes: None,
        },
        SalesOrder {
            id: RecordId::new("ORV-002"),
            customer_id: RecordId::new("CLI-002"),
            customer_name: "Export Global".to_string(),
            lines: vec![OrderLine::new("FRU-001", "Fresas", 500, 5.5)],
            total: 2750.0,
            status: SalesOrderStatus::Shipped,
            ordered_on: date(2025, 1, 19),
            delivered_on: None,
            discount_pct: 5.0,
            notes: None,
        },
    ]
}
