//! Shared test fixtures: small sample payloads in the API wire shape,
//! deserialized into the SDK models.

#![allow(dead_code)]

use formula_cardz_sdk::models::{
    Card, CollectionCard, MarketPriceSnapshot, OneOfOneCard,
};

/// A catalog card with a numbered parallel, a 1/1 and a printing plate.
pub fn catalog_card() -> Card {
    serde_json::from_value(serde_json::json!({
        "id": "card-001",
        "year": 2023,
        "setName": "2023 Topps Chrome F1",
        "cardNumber": "44",
        "driverName": "Lewis Hamilton",
        "constructorName": "Mercedes",
        "subset": null,
        "rookieCard": false,
        "hasOneOfOne": true,
        "baseImageUrl": "https://img.example.com/card-001/base.jpg",
        "parallels": [
            {
                "name": "Gold",
                "printRun": 50,
                "isOneOfOne": false,
                "imageUrl": "https://img.example.com/card-001/gold.jpg"
            },
            {
                "name": "Superfractor",
                "printRun": 1,
                "isOneOfOne": true
            },
            {
                "name": "Printing Plate Black",
                "printRun": 1,
                "isOneOfOne": true,
                "imageUrl": null
            }
        ]
    }))
    .unwrap()
}

/// Tracker cards matching the catalog card above, with community found flags.
pub fn one_of_one_cards() -> Vec<OneOfOneCard> {
    serde_json::from_value(serde_json::json!([
        {
            "id": "card-001",
            "year": 2023,
            "setName": "2023 Topps Chrome F1",
            "cardNumber": "44",
            "driverName": "Lewis Hamilton",
            "constructorName": "Mercedes",
            "rookieCard": false,
            "parallels": [
                { "name": "Gold", "isOneOfOne": false },
                { "name": "Superfractor", "isOneOfOne": true, "isOneOfOneFound": false },
                { "name": "Printing Plate Black", "isOneOfOne": true, "isOneOfOneFound": true }
            ]
        },
        {
            "id": "card-002",
            "year": 2022,
            "setName": "2022 Topps Chrome F1",
            "cardNumber": "1",
            "driverName": "Max Verstappen",
            "constructorName": "Red Bull Racing",
            "rookieCard": false,
            "parallels": [
                { "name": "Superfractor", "isOneOfOne": true, "isOneOfOneFound": true },
                { "name": "Printing Plate Cyan", "isOneOfOne": true }
            ]
        }
    ]))
    .unwrap()
}

/// A small ownership list spanning drivers, teams, parallels and conditions.
pub fn collection_cards() -> Vec<CollectionCard> {
    serde_json::from_value(serde_json::json!([
        {
            "id": "card-001",
            "year": 2023,
            "setName": "2023 Topps Chrome F1",
            "cardNumber": "44",
            "driverName": "Lewis Hamilton",
            "constructorName": "Mercedes",
            "rookieCard": false,
            "parallel": "Gold",
            "imageUrl": "https://img.example.com/card-001/gold.jpg",
            "quantity": 2,
            "condition": "Raw",
            "purchasePrice": 120.0,
            "purchaseDate": "2024-01-15T00:00:00Z"
        },
        {
            "id": "card-002",
            "year": 2022,
            "setName": "2022 Topps Chrome F1",
            "cardNumber": "1",
            "driverName": "Max Verstappen",
            "constructorName": "Red Bull Racing",
            "rookieCard": false,
            "parallel": null,
            "imageUrl": "https://img.example.com/card-002/base.jpg",
            "quantity": 1,
            "condition": "PSA 10",
            "purchasePrice": null,
            "purchaseDate": null
        },
        {
            "id": "card-003",
            "year": 2023,
            "setName": "2023 Topps Chrome F1",
            "cardNumber": "81",
            "driverName": "Oscar Piastri",
            "constructorName": "McLaren",
            "rookieCard": true,
            "parallel": "Red Refractor",
            "imageUrl": "https://img.example.com/card-003/red.jpg",
            "quantity": 3,
            "condition": "Near Mint",
            "purchasePrice": 40.0,
            "purchaseDate": "2023-11-02T00:00:00Z"
        }
    ]))
    .unwrap()
}

/// One price snapshot; `parallel` of `None` marks a base-printing sale.
pub fn snapshot(
    timestamp: &str,
    lowest: f64,
    average: f64,
    highest: f64,
    parallel: Option<&str>,
) -> MarketPriceSnapshot {
    serde_json::from_value(serde_json::json!({
        "timestamp": timestamp,
        "lowestPrice": lowest,
        "averagePrice": average,
        "highestPrice": highest,
        "source": "ebay",
        "parallel": parallel
    }))
    .unwrap()
}
