//! End-to-end runs through the library entry point.

use gilded_core::ItemKind;
use gilded_nightly::{
    classic_inventory, execute, seed_catalog, ItemSpec, NightlyConfig, NightlyRun, OrderSpec,
};

fn quality_of(run: &NightlyRun, day: usize, name: &str) -> Vec<(i64, i64)> {
    run.history()[day]
        .items
        .iter()
        .filter(|i| i.name == name)
        .map(|i| (i.sell_in, i.quality))
        .collect()
}

#[test]
fn test_classic_inventory_after_two_nights() {
    let mut run = NightlyRun::new(seed_catalog(&classic_inventory()));
    run.run_for(2);

    // Standard stock is left as it is
    assert_eq!(quality_of(&run, 2, "+5 Dexterity Vest"), vec![(10, 20)]);
    assert_eq!(quality_of(&run, 2, "Elixir of the Mongoose"), vec![(5, 7)]);
    assert_eq!(
        quality_of(&run, 2, "Sulfuras, Hand of Ragnaros"),
        vec![(0, 80), (-1, 80)]
    );
    assert_eq!(
        quality_of(&run, 2, "Backstage passes to a TAFKAL80ETC concert"),
        vec![(13, 22), (8, 50), (3, 50)]
    );
    assert_eq!(quality_of(&run, 2, "Conjured Mana Cake"), vec![(1, 2)]);
}

#[test]
fn test_backstage_passes_worthless_after_the_concert() {
    let mut run = NightlyRun::new(seed_catalog(&classic_inventory()));
    run.run_for(6);

    let passes = quality_of(&run, 6, "Backstage passes to a TAFKAL80ETC concert");
    assert_eq!(passes[2], (-1, 0));
}

#[test]
fn test_snapshots_are_independent_of_later_days() {
    let mut run = NightlyRun::new(seed_catalog(&classic_inventory()));
    run.run_for(30);

    assert_eq!(run.history().len(), 31);
    assert_eq!(quality_of(&run, 0, "Aged Brie"), vec![(2, 0)]);
    // Brie doubles after its sell-by date and caps at 50
    assert_eq!(quality_of(&run, 30, "Aged Brie"), vec![(-28, 50)]);
}

#[test]
fn test_execute_with_orders_attaches_cart() {
    let config = NightlyConfig {
        inventory: vec![
            ItemSpec::new("Aged Brie", ItemKind::AgedBrie, 2, 0, 1000),
            ItemSpec::new("Plain Rope", ItemKind::Standard, 3, 3, 250),
        ],
        orders: vec![
            OrderSpec {
                item: "Aged Brie".into(),
                amount: 4,
            },
            OrderSpec {
                item: "Aged Brie".into(),
                amount: 6,
            },
            OrderSpec {
                item: "Plain Rope".into(),
                amount: 2,
            },
        ],
        ..NightlyConfig::default()
    };
    config.validate().unwrap();

    let report = execute(&config).unwrap();

    assert_eq!(report.days.len(), 31);
    let cart = report.cart.as_ref().unwrap();
    assert_eq!(cart.line_count, 2);
    assert_eq!(cart.total_quantity, 12);
    // 10 × 8.55 + 2 × 2.37
    assert_eq!(cart.total_price.cents(), 8550 + 474);
}

#[test]
fn test_execute_without_orders_has_no_cart() {
    let mut config = NightlyConfig::default();
    config.run.days = 1;

    let report = execute(&config).unwrap();

    assert!(report.cart.is_none());
    assert_eq!(report.days.len(), 2);
    assert!(report.render_text().starts_with("-------- day 0 --------\n"));
}
