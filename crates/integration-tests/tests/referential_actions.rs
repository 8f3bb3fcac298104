//! Cascade and set-null behavior across the seven tables.

use tangelo_core::{Email, Quantity, Slug};
use tangelo_integration_tests::{seed_category, seed_product, seed_user, test_pool};
use tangelo_schema::db::{
    CartItemRepository, CategoryRepository, OrderRepository, ProductRepository,
    ProviderRepository, UserRepository,
};
use tangelo_schema::models::{NewCartItem, NewOrder, NewOrderItem, NewProduct, NewProvider};

#[tokio::test]
async fn deleting_category_removes_its_products() {
    let pool = test_pool().await;
    let electronics = seed_category(&pool, "Electronics").await;
    let cable = seed_product(&pool, electronics.id, "USB Cable", "5.00", 10).await;
    assert_eq!(cable.slug.as_str(), "usb-cable");

    let deleted = CategoryRepository::new(&pool)
        .delete(electronics.id)
        .await
        .expect("delete succeeds");
    assert!(deleted);

    let gone = ProductRepository::new(&pool)
        .get_by_id(cable.id)
        .await
        .expect("query succeeds");
    assert!(gone.is_none(), "product must be cascaded away");
}

#[tokio::test]
async fn deleting_provider_nulls_product_reference() {
    let pool = test_pool().await;
    let category = seed_category(&pool, "Electronics").await;

    let providers = ProviderRepository::new(&pool);
    let acme = providers
        .create(&NewProvider {
            name: "Acme Supplies".to_owned(),
            phone: "555-0100".to_owned(),
            email: Email::parse("sales@acme.example").expect("valid email"),
            address: "10 Depot Rd".to_owned(),
        })
        .await
        .expect("provider created");

    let products = ProductRepository::new(&pool);
    let lamp = products
        .create(&NewProduct {
            name: "Desk Lamp".to_owned(),
            slug: Slug::parse("desk-lamp").expect("valid slug"),
            description: Some("Adjustable arm".to_owned()),
            price: "24.99".parse().expect("valid price"),
            stock: 4,
            image_url: "https://img.example.com/lamp.jpg".to_owned(),
            category_id: category.id,
            provider_id: Some(acme.id),
        })
        .await
        .expect("product created");
    assert_eq!(lamp.provider_id, Some(acme.id));

    assert!(providers.delete(acme.id).await.expect("delete succeeds"));

    let survivor = products
        .get_by_id(lamp.id)
        .await
        .expect("query succeeds")
        .expect("product must survive provider deletion");
    assert_eq!(survivor.provider_id, None);
    assert_eq!(survivor.name, "Desk Lamp");
}

#[tokio::test]
async fn deleting_product_removes_cart_items() {
    let pool = test_pool().await;
    let user = seed_user(&pool, "ana").await;
    let category = seed_category(&pool, "Electronics").await;
    let cable = seed_product(&pool, category.id, "USB Cable", "5.00", 10).await;

    let cart = CartItemRepository::new(&pool);
    cart.add(&NewCartItem::of_product(
        user.id,
        &cable,
        Quantity::new(2).expect("positive"),
    ))
    .await
    .expect("cart add succeeds");

    assert!(
        ProductRepository::new(&pool)
            .delete(cable.id)
            .await
            .expect("delete succeeds")
    );

    let items = cart
        .list_for_user(user.id)
        .await
        .expect("query succeeds");
    assert!(items.is_empty(), "cart items must be cascaded away");
}

#[tokio::test]
async fn deleting_product_nulls_order_items_and_keeps_snapshot() {
    let pool = test_pool().await;
    let user = seed_user(&pool, "ana").await;
    let category = seed_category(&pool, "Electronics").await;
    let cable = seed_product(&pool, category.id, "USB Cable", "5.00", 10).await;

    let orders = OrderRepository::new(&pool);
    let line = NewOrderItem::of_product(&cable, Quantity::new(2).expect("positive"));
    let order = orders
        .create(&NewOrder {
            user_id: user.id,
            total_amount: "10.00".parse().expect("valid price"),
            address: "1 Main St".to_owned(),
            payment_method: "card".to_owned(),
            items: vec![line],
        })
        .await
        .expect("order created");

    assert!(
        ProductRepository::new(&pool)
            .delete(cable.id)
            .await
            .expect("delete succeeds")
    );

    let items = orders.items(order.id).await.expect("query succeeds");
    assert_eq!(items.len(), 1);
    let item = items.first().expect("one line");
    assert_eq!(item.product_id, None, "live reference must be nulled");
    assert_eq!(item.product_name, "USB Cable");
    assert_eq!(item.price, "5.00".parse().expect("valid price"));
    assert_eq!(item.amount.get(), 2);
}

#[tokio::test]
async fn deleting_user_cascades_cart_items_and_orders() {
    let pool = test_pool().await;
    let user = seed_user(&pool, "ana").await;
    let category = seed_category(&pool, "Electronics").await;
    let cable = seed_product(&pool, category.id, "USB Cable", "5.00", 10).await;

    let cart = CartItemRepository::new(&pool);
    cart.add(&NewCartItem::of_product(
        user.id,
        &cable,
        Quantity::new(1).expect("positive"),
    ))
    .await
    .expect("cart add succeeds");

    let orders = OrderRepository::new(&pool);
    let order = orders
        .create(&NewOrder {
            user_id: user.id,
            total_amount: "5.00".parse().expect("valid price"),
            address: "1 Main St".to_owned(),
            payment_method: "cash on delivery".to_owned(),
            items: vec![NewOrderItem::of_product(
                &cable,
                Quantity::new(1).expect("positive"),
            )],
        })
        .await
        .expect("order created");

    assert!(
        UserRepository::new(&pool)
            .delete(user.id)
            .await
            .expect("delete succeeds")
    );

    assert!(
        cart.list_for_user(user.id)
            .await
            .expect("query succeeds")
            .is_empty()
    );
    assert!(
        orders
            .get_by_id(order.id)
            .await
            .expect("query succeeds")
            .is_none(),
        "orders must be cascaded away with their user"
    );
    assert!(
        orders
            .items(order.id)
            .await
            .expect("query succeeds")
            .is_empty(),
        "order items must follow their order"
    );

    // The product itself is untouched.
    assert!(
        ProductRepository::new(&pool)
            .get_by_id(cable.id)
            .await
            .expect("query succeeds")
            .is_some()
    );
}
