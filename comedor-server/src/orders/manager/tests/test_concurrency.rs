//! Concurrent mutation tests: merges must not lose updates or duplicate
//! lines

use super::*;
use std::thread;

#[test]
fn test_concurrent_adds_of_same_product_merge() {
    let (catalog, manager) = test_manager();
    let menu = seed_product(&catalog, "Menu del dia", dec(15_00));
    manager.start_order("cashier-1", None).unwrap();

    let manager = Arc::new(manager);
    let threads = 8;
    let handles: Vec<_> = (0..threads)
        .map(|_| {
            let manager = manager.clone();
            let product_id = menu.id.clone();
            thread::spawn(move || {
                manager.add_item("cashier-1", &product_id, 1).unwrap();
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let order = manager.current_order("cashier-1").unwrap();
    assert_eq!(order.items.len(), 1);
    assert_eq!(order.items[0].quantity, threads);
    assert_eq!(order.items[0].subtotal, dec(15_00) * Decimal::from(threads));
    assert_eq!(order.total, order.items[0].subtotal);
}

#[test]
fn test_concurrent_orders_do_not_interfere() {
    let (catalog, manager) = test_manager();
    let menu = seed_product(&catalog, "Menu del dia", dec(15_00));
    let water = seed_product(&catalog, "Agua", dec(1_50));

    let manager = Arc::new(manager);
    let handles: Vec<_> = [("cashier-1", menu.id.clone()), ("cashier-2", water.id.clone())]
        .into_iter()
        .map(|(operator, product_id)| {
            let manager = manager.clone();
            thread::spawn(move || {
                manager.start_order(operator, None).unwrap();
                for _ in 0..5 {
                    manager.add_item(operator, &product_id, 1).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let first = manager.current_order("cashier-1").unwrap();
    let second = manager.current_order("cashier-2").unwrap();
    assert_ne!(first.folio, second.folio);
    assert_eq!(first.total, dec(75_00));
    assert_eq!(second.total, dec(7_50));
}

#[test]
fn test_concurrent_starts_get_unique_folios() {
    let (_catalog, manager) = test_manager();
    let manager = Arc::new(manager);

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let manager = manager.clone();
            thread::spawn(move || {
                manager
                    .start_order(&format!("cashier-{}", i), None)
                    .unwrap()
                    .folio
            })
        })
        .collect();
    let mut folios: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    folios.sort();
    folios.dedup();
    assert_eq!(folios.len(), 16);
}
