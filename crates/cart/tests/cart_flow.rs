//! Black-box cart flow: cookie in, rendered views and totals out, through
//! real in-memory collaborators.

use anyhow::Result;
use rust_decimal_macros::dec;

use shoplite_cart::{CartDataProvider, CartStore, CookieCartStore, read_cookie, write_cookie};
use shoplite_catalog::{BuyableRecord, InMemoryCatalog, ItemPricing, StockDescriptor};
use shoplite_core::{ItemId, Money, VatRate};
use shoplite_locale::{Localizer, Message, NullLocalizer};
use shoplite_settings::InMemorySettings;

struct Shop {
    catalog: InMemoryCatalog,
    settings: InMemorySettings,
    apples: ItemId,
    wine: ItemId,
    poster: ItemId,
}

fn build_shop() -> Shop {
    let apples = ItemId::new();
    let wine = ItemId::new();
    let poster = ItemId::new();

    let mut catalog = InMemoryCatalog::new();
    catalog.insert(
        BuyableRecord::new(
            apples,
            "Apples",
            "/shop/apples",
            ItemPricing {
                net: Money::new(dec!(2.50)),
                vat: VatRate::new(dec!(10)),
                display_gross: false,
            },
        )
        .with_description("Crisp and sour")
        .with_quantity_unit(Message::new("quantity_unit_kg", "kg"), true),
    );
    catalog.insert(
        BuyableRecord::new(
            wine,
            "Wine",
            "/shop/wine",
            ItemPricing {
                net: Money::new(dec!(10.00)),
                vat: VatRate::new(dec!(20)),
                display_gross: true,
            },
        )
        .with_comment_required(true)
        .with_preview_image_url("/shop/wine/preview.jpg"),
    );
    catalog.insert(
        BuyableRecord::new(
            poster,
            "Poster",
            "/shop/poster",
            ItemPricing {
                net: Money::new(dec!(8.00)),
                vat: VatRate::new(dec!(20)),
                display_gross: false,
            },
        )
        .with_stock(StockDescriptor::limited(0.0, 5.0)),
    );

    let mut settings = InMemorySettings::new();
    settings.set("shop.currency", "CHF");
    settings.set("shop.summary_total_only", true);

    Shop {
        catalog,
        settings,
        apples,
        wine,
        poster,
    }
}

#[test]
fn cookie_to_rendered_cart() -> Result<()> {
    let shop = build_shop();

    let cookie = format!(
        "{}:1.5,{}:2;to%20the%20Smiths,{}:3,{}:4",
        shop.apples,
        shop.wine,
        shop.poster,
        ItemId::new(), // deleted long ago
    );
    let store = CookieCartStore::from_cookie(&cookie);
    let lines = store.lines();
    assert_eq!(lines.len(), 4);

    let localizer = NullLocalizer;
    let provider = CartDataProvider::new(&shop.catalog, &shop.settings, &localizer, &store);

    let views = provider.cart_items(&lines)?;
    assert_eq!(views.len(), 3, "the stale line is dropped");

    let apples = &views[0];
    assert_eq!(apples.title, "Apples");
    assert_eq!(apples.price, Money::new(dec!(3.75)));
    assert_eq!(apples.quantity_unit, "kg");
    assert!(apples.quantity_unit_float);
    assert_eq!(apples.description, "Crisp and sour");

    let wine = &views[1];
    // 10.00 * 2 = 20.00 net, displayed gross with 20% VAT on top.
    assert_eq!(wine.price, Money::new(dec!(24.00)));
    assert!(wine.comment_required);
    assert_eq!(wine.comment.as_deref(), Some("to the Smiths"));
    assert_eq!(wine.preview_image_url.as_deref(), Some("/shop/wine/preview.jpg"));

    let poster = &views[2];
    assert_eq!(poster.alert, "3 items reserved");
    assert!(!poster.no_longer_available);

    // Totals ignore the stale line: 2.50*1.5 + 10*2 + 8*3.
    assert_eq!(provider.net(&lines)?, Money::new(dec!(47.75)));
    // 0.25*1.5 + 2*2 + 1.6*3.
    assert_eq!(provider.vat(&lines)?, Money::new(dec!(9.175)));

    assert_eq!(provider.currency(), "CHF");
    assert!(provider.summary_total_only());
    assert_eq!(
        provider.checkout_url("https://shop.example"),
        "https://shop.example/@@checkout"
    );

    Ok(())
}

#[test]
fn cart_cookie_round_trips_through_the_store() {
    let shop = build_shop();
    let lines = vec![
        shoplite_cart::CartLine::new(shop.apples, dec!(0.5)).with_comment("green, please"),
        shoplite_cart::CartLine::new(shop.wine, dec!(6)),
    ];

    let cookie = write_cookie(&lines);
    assert_eq!(read_cookie(&cookie), lines);

    let store = CookieCartStore::from_cookie(&cookie);
    assert_eq!(store.aggregated_count(shop.wine), dec!(6));
}

#[test]
fn exhausted_stock_renders_the_removal_alert() -> Result<()> {
    let shop = build_shop();

    // Six posters requested with available 0 / overbook 5: one over the
    // threshold, so the line is both alerted and invalid.
    let lines = vec![shoplite_cart::CartLine::new(shop.poster, dec!(6))];
    let store = CookieCartStore::new(lines.clone());
    let localizer = NullLocalizer;
    let provider = CartDataProvider::new(&shop.catalog, &shop.settings, &localizer, &store);

    let views = provider.cart_items(&lines)?;
    assert_eq!(views[0].alert, "Limit exceed by 1 items");
    assert!(views[0].no_longer_available);

    Ok(())
}

/// A localizer with a fixed catalog, proving the message seam carries ids
/// and substitutions, not prebaked strings.
struct GermanLocalizer;

impl Localizer for GermanLocalizer {
    fn translate(&self, message: &Message) -> String {
        let template = match message.id() {
            "alert_item_number_reserved" => "${reserved} Artikel reserviert",
            "quantity_unit_items" => "Stück",
            _ => return message.render_default(),
        };
        shoplite_locale::render_template(template, message.args())
    }
}

#[test]
fn translated_messages_keep_their_substitutions() -> Result<()> {
    let shop = build_shop();

    let lines = vec![shoplite_cart::CartLine::new(shop.poster, dec!(3))];
    let store = CookieCartStore::new(lines.clone());
    let localizer = GermanLocalizer;
    let provider = CartDataProvider::new(&shop.catalog, &shop.settings, &localizer, &store);

    let views = provider.cart_items(&lines)?;
    assert_eq!(views[0].alert, "3 Artikel reserviert");
    assert_eq!(views[0].quantity_unit, "Stück");

    Ok(())
}
