//! Rejection paths: bad input, bad state, missing references

use super::*;

#[test]
fn test_zero_or_negative_quantity_rejected() {
    let (catalog, manager) = test_manager();
    let menu = seed_product(&catalog, "Menu del dia", dec(15_00));
    manager.start_order("cashier-1", None).unwrap();

    for quantity in [0, -1, -100] {
        let err = manager.add_item("cashier-1", &menu.id, quantity).unwrap_err();
        assert!(matches!(err, OrderError::InvalidInput(_)), "quantity {}", quantity);
    }
    // Rejections leave the order untouched
    let order = manager.current_order("cashier-1").unwrap();
    assert!(order.items.is_empty());
    assert_eq!(order.total, Decimal::ZERO);
}

#[test]
fn test_merge_cannot_exceed_quantity_bound() {
    let (catalog, manager) = test_manager();
    let menu = seed_product(&catalog, "Menu del dia", dec(15_00));
    start_with_items(&manager, "cashier-1", &[(&menu.id, 9000)]);

    // Each call is in range, the merged line would not be
    let err = manager.add_item("cashier-1", &menu.id, 2000).unwrap_err();
    assert!(matches!(err, OrderError::InvalidInput(_)));

    // The rejected merge leaves the line untouched
    let order = manager.current_order("cashier-1").unwrap();
    assert_eq!(order.items[0].quantity, 9000);
    assert_eq!(order.total, dec(15_00) * Decimal::from(9000));
}

#[test]
fn test_unknown_product_rejected() {
    let (_catalog, manager) = test_manager();
    manager.start_order("cashier-1", None).unwrap();

    let err = manager.add_item("cashier-1", "no-such-product", 1).unwrap_err();
    assert!(matches!(err, OrderError::ProductNotFound(_)));
}

#[test]
fn test_unavailable_product_rejected() {
    let (catalog, manager) = test_manager();
    let menu = seed_product(&catalog, "Menu del dia", dec(15_00));
    set_available(&catalog, &menu.id, false);
    manager.start_order("cashier-1", None).unwrap();

    let err = manager.add_item("cashier-1", &menu.id, 1).unwrap_err();
    assert!(matches!(err, OrderError::ProductUnavailable(_)));
}

#[test]
fn test_checkout_rejects_empty_order() {
    let (_catalog, manager) = test_manager();
    manager.start_order("cashier-1", None).unwrap();

    let err = manager.checkout("cashier-1").unwrap_err();
    assert!(matches!(err, OrderError::EmptyOrder(_)));

    let order = manager.current_order("cashier-1").unwrap();
    assert_eq!(order.status, OrderStatus::PendingPayment);
}

#[test]
fn test_checkout_rejects_already_paid() {
    let (catalog, manager) = test_manager();
    let menu = seed_product(&catalog, "Menu del dia", dec(15_00));
    start_with_items(&manager, "cashier-1", &[(&menu.id, 1)]);
    manager.checkout("cashier-1").unwrap();

    let err = manager.checkout("cashier-1").unwrap_err();
    assert!(matches!(err, OrderError::InvalidState(_)));
}

#[test]
fn test_cart_frozen_after_checkout() {
    let (catalog, manager) = test_manager();
    let menu = seed_product(&catalog, "Menu del dia", dec(15_00));
    let order = start_with_items(&manager, "cashier-1", &[(&menu.id, 1)]);
    manager.checkout("cashier-1").unwrap();

    let err = manager.add_item("cashier-1", &menu.id, 1).unwrap_err();
    assert!(matches!(err, OrderError::InvalidState(_)));

    let line_id = order.items[0].id.clone();
    let err = manager.remove_item("cashier-1", &line_id).unwrap_err();
    assert!(matches!(err, OrderError::InvalidState(_)));
}

#[test]
fn test_remove_unknown_line_rejected() {
    let (catalog, manager) = test_manager();
    let menu = seed_product(&catalog, "Menu del dia", dec(15_00));
    start_with_items(&manager, "cashier-1", &[(&menu.id, 1)]);

    let err = manager.remove_item("cashier-1", "no-such-line").unwrap_err();
    assert!(matches!(err, OrderError::ItemNotFound(_)));
}

#[test]
fn test_operations_without_active_order_rejected() {
    let (catalog, manager) = test_manager();
    let menu = seed_product(&catalog, "Menu del dia", dec(15_00));

    assert!(matches!(
        manager.add_item("cashier-1", &menu.id, 1).unwrap_err(),
        OrderError::NoActiveOrder(_)
    ));
    assert!(matches!(
        manager.checkout("cashier-1").unwrap_err(),
        OrderError::NoActiveOrder(_)
    ));
    assert!(matches!(
        manager.send_to_kitchen("cashier-1").unwrap_err(),
        OrderError::NoActiveOrder(_)
    ));
    assert!(manager.current_order("cashier-1").is_none());
}

#[test]
fn test_nonpositive_payment_amount_rejected() {
    let (catalog, manager) = test_manager();
    let menu = seed_product(&catalog, "Menu del dia", dec(15_00));
    let order = start_with_items(&manager, "cashier-1", &[(&menu.id, 1)]);
    manager.checkout("cashier-1").unwrap();

    for amount in [Decimal::ZERO, dec(-1_00)] {
        let err = manager
            .record_payment(
                &order.id,
                PaymentInput {
                    method: PaymentMethod::Cash,
                    amount,
                },
            )
            .unwrap_err();
        assert!(matches!(err, OrderError::InvalidPaymentAmount(_)));
        let app: shared::AppError = err.into();
        assert_eq!(app.code, shared::ErrorCode::PaymentInvalidAmount);
    }
}

#[test]
fn test_unknown_order_id_rejected() {
    let (_catalog, manager) = test_manager();

    assert!(matches!(
        manager.get_order("no-such-order").unwrap_err(),
        OrderError::OrderNotFound(_)
    ));
    assert!(matches!(
        manager
            .set_status("no-such-order", OrderStatus::Ready)
            .unwrap_err(),
        OrderError::OrderNotFound(_)
    ));
    assert!(matches!(
        manager.find_by_folio("C19700101-0001").unwrap_err(),
        OrderError::OrderNotFound(_)
    ));
}
