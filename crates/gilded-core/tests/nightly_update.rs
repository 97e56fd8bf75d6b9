use gilded_core::{apply_daily_update, Catalog, Item, ItemKind, Money, QualityState, MAX_QUALITY};

fn run(kind: ItemKind, sell_in: i64, quality: i64, days: usize) -> Vec<QualityState> {
    let mut state = QualityState::new(sell_in, quality);
    let mut history = vec![state];
    for _ in 0..days {
        state = apply_daily_update(kind, state);
        history.push(state);
    }
    history
}

#[test]
fn test_aged_brie_quality_never_drops_and_never_exceeds_fifty() {
    for start_quality in [0, 1, 25, 48, 49, 50] {
        for start_sell_in in [-3, 0, 1, 5, 30] {
            let history = run(ItemKind::AgedBrie, start_sell_in, start_quality, 120);
            for pair in history.windows(2) {
                assert!(pair[1].quality >= pair[0].quality);
                assert!(pair[1].quality <= MAX_QUALITY);
            }
        }
    }
}

#[test]
fn test_backstage_pass_quality_never_exceeds_fifty() {
    for start_quality in [0, 20, 45, 49, 50] {
        let history = run(ItemKind::BackstagePass, 15, start_quality, 40);
        assert!(history.iter().all(|s| s.quality <= MAX_QUALITY));
        // Worthless from the day after the concert onwards
        assert!(history[16..].iter().all(|s| s.quality == 0));
    }
}

#[test]
fn test_backstage_pass_reference_points() {
    let cases = [
        ((15, 20), (14, 21)),
        ((10, 20), (9, 22)),
        ((5, 20), (4, 23)),
        ((0, 20), (-1, 0)),
    ];
    for ((sell_in, quality), (want_sell_in, want_quality)) in cases {
        let next = apply_daily_update(ItemKind::BackstagePass, QualityState::new(sell_in, quality));
        assert_eq!(next, QualityState::new(want_sell_in, want_quality));
    }
}

#[test]
fn test_sulfuras_never_changes() {
    let history = run(ItemKind::Sulfuras, 0, 80, 365);
    assert!(history.iter().all(|s| *s == QualityState::new(0, 80)));

    let history = run(ItemKind::Sulfuras, -1, 80, 365);
    assert!(history.iter().all(|s| *s == QualityState::new(-1, 80)));
}

#[test]
fn test_conjured_reference_points_and_floor() {
    assert_eq!(
        apply_daily_update(ItemKind::Conjured, QualityState::new(5, 10)),
        QualityState::new(4, 8)
    );
    assert_eq!(
        apply_daily_update(ItemKind::Conjured, QualityState::new(0, 3)),
        QualityState::new(-1, 0)
    );

    let history = run(ItemKind::Conjured, 3, 17, 30);
    assert!(history.iter().all(|s| s.quality >= 0));
}

#[test]
fn test_standard_items_stay_put() {
    let history = run(ItemKind::Standard, 10, 20, 50);
    assert!(history.iter().all(|s| *s == QualityState::new(10, 20)));
}

#[test]
fn test_inn_inventory_after_three_nights() {
    let mut catalog = Catalog::new();
    let vest = catalog.add_item(Item::new("+5 Dexterity Vest", 10, 20, Money::from_cents(1500)));
    let brie = catalog.add_item(Item::aged_brie("Aged Brie", 2, 0, Money::from_cents(800)));
    let hand = catalog.add_item(Item::sulfuras(
        "Sulfuras, Hand of Ragnaros",
        0,
        80,
        Money::from_cents(100_000),
    ));
    let pass = catalog.add_item(Item::backstage_pass(
        "Backstage passes to a TAFKAL80ETC concert",
        11,
        48,
        Money::from_cents(2500),
    ));
    let cake = catalog.add_item(Item::conjured("Conjured Mana Cake", 1, 6, Money::from_cents(300)));

    for _ in 0..3 {
        catalog.update_quality();
    }

    let state = |id| {
        let item = catalog.get(id).unwrap();
        (item.sell_in, item.quality)
    };

    assert_eq!(state(vest), (10, 20));
    // 2/0 → 1/1 → 0/2 → -1/4
    assert_eq!(state(brie), (-1, 4));
    assert_eq!(state(hand), (0, 80));
    // 11/48 → 10/49 → 9/50 → 8/50
    assert_eq!(state(pass), (8, 50));
    // 1/6 → 0/4 → -1/0 → -2/0
    assert_eq!(state(cake), (-2, 0));
}
