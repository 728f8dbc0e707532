use chrono::NaiveDate;

use engine::{
    Catalog, CatalogRecipeLine, CatalogSupply, CatalogVehicleType, Category, Cell,
    ConsumptionTotals, EngineError, Facility, InventorySnapshot, Quantity, SealLogNew,
    SealLogRecord, SupplyRecord, WashNew, WashRecord, aggregate, classify, reduce, seal_report,
    seals_used, total_seals_used, wash_report,
};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 7, d).unwrap()
}

fn facility() -> Facility {
    let supply = |name: &str, litres: i64| CatalogSupply {
        name: name.to_string(),
        sku: None,
        quantity: Quantity::whole(litres),
    };
    let line = |supply: &str, ml: i64| CatalogRecipeLine {
        supply: supply.to_string(),
        ml: Quantity::whole(ml),
    };

    Facility::from_catalog(Catalog {
        supplies: vec![
            supply("Disinfectant", 20),
            supply("Degreaser", 15),
            supply("Bleach", 10),
            supply("Wax", 5),
        ],
        vehicle_types: vec![
            CatalogVehicleType {
                name: "Truck".to_string(),
                recipe: vec![
                    line("Disinfectant", 500),
                    line("Degreaser", 250),
                    line("Bleach", 100),
                    line("Wax", 50),
                ],
            },
            CatalogVehicleType {
                name: "Van".to_string(),
                recipe: vec![line("disinfectant", 200)],
            },
        ],
    })
    .unwrap()
}

fn wash(id: u64, water: i64, disinf: i64, degreaser: Option<i64>, bleach: i64) -> WashRecord {
    WashRecord {
        id: Some(id),
        date: Some(day(1)),
        vehicle_type: None,
        washing_minutes: None,
        water_used: Some(Quantity::from_millis(water)),
        disinfectant_used: Some(Quantity::from_millis(disinf)),
        degreaser_used: degreaser.map(Quantity::from_millis),
        bleach_used: Some(Quantity::from_millis(bleach)),
    }
}

fn seal_log(id: u64, initial: &str, last: &str) -> SealLogRecord {
    SealLogRecord {
        id: Some(id),
        date: Some(day(3)),
        driver_name: "Marta".to_string(),
        washer_name: "Jose".to_string(),
        vehicle_type: "Reefer".to_string(),
        license_plate: "TX-9921".to_string(),
        initial_strap: Some(initial.to_string()),
        final_strap: Some(last.to_string()),
    }
}

#[test]
fn classify_agrees_across_languages() {
    assert_eq!(classify(Some("Disinfectant")), classify(Some(" desinfectante ")));
    assert_eq!(classify(Some("DEGREASER")), classify(Some("Desengrasante")));
    assert_eq!(classify(Some("bleach")), Some(Category::Bleach));
    assert_eq!(classify(Some("")), None);
    assert_eq!(classify(None), None);
}

#[test]
fn reduce_keeps_last_write_per_category() {
    let snapshot = reduce(&[
        SupplyRecord::new("bleach", Quantity::whole(5)),
        SupplyRecord::new("cloro", Quantity::whole(9)),
    ]);
    assert_eq!(
        snapshot,
        InventorySnapshot {
            disinfectant: Quantity::ZERO,
            degreaser: Quantity::ZERO,
            bleach: Quantity::whole(9),
        }
    );
}

#[test]
fn aggregate_is_order_independent() {
    let records = vec![
        wash(1, 40_000, 250_125, Some(100_000), 75_000),
        wash(2, 0, 100_333, None, 1),
        wash(3, 12_345, 7, Some(33_333), 66_667),
        wash(4, 1, 0, Some(1), 0),
    ];
    let expected = aggregate(&records);

    let mut reversed = records.clone();
    reversed.reverse();
    assert_eq!(aggregate(&reversed), expected);

    for shift in 1..records.len() {
        let mut rotated = records.clone();
        rotated.rotate_left(shift);
        assert_eq!(aggregate(&rotated), expected);
    }

    let mut swapped = records;
    swapped.swap(0, 2);
    assert_eq!(aggregate(&swapped), expected);

    assert_eq!(aggregate(&Vec::<WashRecord>::new()), ConsumptionTotals::default());
}

#[test]
fn seal_rules() {
    assert_eq!(seals_used(&seal_log(1, "100", "107")), Some(7));
    assert_eq!(seals_used(&seal_log(2, "107", "100")), None);
    assert_eq!(seals_used(&seal_log(3, "abc", "10")), None);
    assert_eq!(
        total_seals_used(&[seal_log(1, "100", "107"), seal_log(3, "abc", "10")]),
        7
    );
}

#[test]
fn reports_have_exactly_one_totals_row() {
    let washes = vec![wash(1, 40_000, 500_000, None, 100_000), wash(2, 20_000, 0, Some(5), 0)];
    let report = wash_report(&washes);
    assert_eq!(report.rows.len(), washes.len() + 1);
    let totals = aggregate(&washes);
    let water = report.column("Water (L)").unwrap();
    assert_eq!(report.totals_row().unwrap()[water], Cell::Quantity(totals.water));

    let logs = vec![
        seal_log(1, "100", "107"),
        seal_log(2, "x", "3"),
        seal_log(3, "20", "25"),
    ];
    let report = seal_report(&logs);
    assert_eq!(report.rows.len(), logs.len() + 1);
    let qty = report.column("Qty Used").unwrap();
    assert_eq!(
        report.totals_row().unwrap()[qty],
        Cell::Count(total_seals_used(&logs))
    );
    assert_eq!(report.totals_row().unwrap()[qty], Cell::Count(12));

    let empty = seal_report(&[]);
    assert_eq!(empty.rows.len(), 1);
    assert_eq!(empty.totals_row().unwrap()[qty], Cell::Count(0));
}

#[test]
fn register_wash_deducts_recipe_and_records_usage() {
    let mut facility = facility();
    let truck = facility.vehicle_types()[0].id;

    let wash = facility
        .register_wash(WashNew {
            vehicle_type_id: Some(truck),
            washing_minutes: Some(6),
            date: day(4),
        })
        .unwrap()
        .clone();

    assert_eq!(wash.id, Some(1));
    assert_eq!(wash.date, Some(day(4)));
    assert_eq!(wash.vehicle_type_name(), Some("Truck"));
    assert_eq!(wash.water_used, Some(Quantity::whole(60)));
    assert_eq!(wash.disinfectant_used, Some(Quantity::whole(500)));
    assert_eq!(wash.degreaser_used, Some(Quantity::whole(250)));
    assert_eq!(wash.bleach_used, Some(Quantity::whole(100)));

    let snapshot = reduce(facility.supplies());
    assert_eq!(snapshot.disinfectant, Quantity::from_millis(19_500));
    assert_eq!(snapshot.degreaser, Quantity::from_millis(14_750));
    assert_eq!(snapshot.bleach, Quantity::from_millis(9_900));

    let wax = facility
        .supplies()
        .iter()
        .find(|supply| supply.name.as_deref() == Some("Wax"))
        .unwrap();
    assert_eq!(wax.current_quantity, Quantity::from_millis(4_950));
}

#[test]
fn register_wash_without_minutes_uses_no_water() {
    let mut facility = facility();
    let van = facility.vehicle_types()[1].id;
    let wash = facility
        .register_wash(WashNew {
            vehicle_type_id: Some(van),
            washing_minutes: None,
            date: day(4),
        })
        .unwrap();
    assert_eq!(wash.water_used, Some(Quantity::ZERO));
    assert_eq!(wash.disinfectant_used, Some(Quantity::whole(200)));
    assert_eq!(wash.bleach_used, Some(Quantity::ZERO));
}

#[test]
fn register_wash_unknown_vehicle_type() {
    let mut facility = facility();
    let err = facility
        .register_wash(WashNew {
            vehicle_type_id: Some(99),
            washing_minutes: Some(1),
            date: day(4),
        })
        .unwrap_err();
    assert_eq!(err, EngineError::KeyNotFound("vehicle type 99".to_string()));
    assert!(facility.washes().is_empty());
}

#[test]
fn stock_never_goes_negative() {
    let mut facility = facility();
    let truck = facility.vehicle_types()[0].id;
    for _ in 0..25 {
        facility
            .register_wash(WashNew {
                vehicle_type_id: Some(truck),
                washing_minutes: Some(1),
                date: day(5),
            })
            .unwrap();
    }
    let snapshot = reduce(facility.supplies());
    assert_eq!(snapshot.bleach, Quantity::from_millis(7_500));
    assert_eq!(snapshot.degreaser, Quantity::from_millis(8_750));
    assert_eq!(snapshot.disinfectant, Quantity::from_millis(7_500));

    let wax = facility
        .supplies()
        .iter()
        .find(|supply| supply.name.as_deref() == Some("Wax"))
        .unwrap();
    assert_eq!(wax.current_quantity, Quantity::from_millis(3_750));

    for _ in 0..200 {
        facility
            .register_wash(WashNew {
                vehicle_type_id: Some(truck),
                washing_minutes: Some(1),
                date: day(5),
            })
            .unwrap();
    }
    let snapshot = reduce(facility.supplies());
    assert_eq!(snapshot, InventorySnapshot::default());
}

#[test]
fn delete_wash_restores_stock() {
    let mut facility = facility();
    let truck = facility.vehicle_types()[0].id;
    let before = reduce(facility.supplies());

    let id = facility
        .register_wash(WashNew {
            vehicle_type_id: Some(truck),
            washing_minutes: Some(3),
            date: day(6),
        })
        .unwrap()
        .id
        .unwrap();
    assert_ne!(reduce(facility.supplies()), before);

    let removed = facility.delete_wash(id).unwrap();
    assert_eq!(removed.id, Some(id));
    assert!(facility.washes().is_empty());
    assert_eq!(reduce(facility.supplies()), before);

    assert_eq!(
        facility.delete_wash(id).unwrap_err(),
        EngineError::KeyNotFound(format!("wash {id}"))
    );
}

#[test]
fn clear_washes_keeps_stock() {
    let mut facility = facility();
    let truck = facility.vehicle_types()[0].id;
    facility
        .register_wash(WashNew {
            vehicle_type_id: Some(truck),
            washing_minutes: Some(3),
            date: day(6),
        })
        .unwrap();
    let after_wash = reduce(facility.supplies());

    assert_eq!(facility.clear_washes(), 1);
    assert!(facility.washes().is_empty());
    assert_eq!(reduce(facility.supplies()), after_wash);
    assert_eq!(aggregate(facility.washes()), ConsumptionTotals::default());
}

#[test]
fn restock_adds_to_existing_or_creates() {
    let mut facility = facility();

    let bleach = facility.restock("BLEACH", Quantity::from_millis(2_500)).unwrap();
    assert_eq!(bleach.current_quantity, Quantity::from_millis(12_500));
    assert_eq!(bleach.name.as_deref(), Some("Bleach"));

    let created = facility.restock("cloro extra", Quantity::whole(4)).unwrap();
    assert_eq!(created.sku.as_deref(), Some("CLORO_EXTR-001"));
    assert_eq!(created.id, Some(5));
    assert_eq!(created.current_quantity, Quantity::whole(4));

    let snapshot = reduce(facility.supplies());
    assert_eq!(snapshot.bleach, Quantity::whole(4));
}

#[test]
fn reset_inventory_zeroes_everything() {
    let mut facility = facility();
    facility.reset_inventory();
    assert!(
        facility
            .supplies()
            .iter()
            .all(|supply| supply.current_quantity.is_zero())
    );
    assert_eq!(reduce(facility.supplies()), InventorySnapshot::default());
}

#[test]
fn seal_log_lifecycle() {
    let mut facility = facility();
    let entry = |initial: &str, last: &str| SealLogNew {
        date: day(8),
        driver_name: " Pedro ".to_string(),
        washer_name: "Ana".to_string(),
        vehicle_type: "Reefer".to_string(),
        license_plate: "TX-1".to_string(),
        initial_strap: Some(initial.to_string()),
        final_strap: Some(last.to_string()),
    };

    let first = facility.add_seal_log(entry("500", "512")).unwrap().id.unwrap();
    let second = facility.add_seal_log(entry("520", "510")).unwrap().id.unwrap();
    assert_eq!((first, second), (1, 2));
    assert_eq!(facility.seal_logs()[0].driver_name, "Pedro");
    assert_eq!(total_seals_used(facility.seal_logs()), 12);

    facility.delete_seal_log(first).unwrap();
    assert_eq!(total_seals_used(facility.seal_logs()), 0);
    assert!(matches!(
        facility.delete_seal_log(first),
        Err(EngineError::KeyNotFound(_))
    ));

    let third = facility.add_seal_log(entry("1", "2")).unwrap().id.unwrap();
    assert_eq!(third, 3);
    assert_eq!(facility.clear_seal_logs(), 2);
    assert!(facility.seal_logs().is_empty());
}
