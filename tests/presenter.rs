use pantryplan::presenter::{TerminalPresenter, View};
use pantryplan_kitchen::{Kitchen, KitchenSettings, MemoryStore};
use pantryplan_mealplan::{PlanGenerator, PlanPolicy};
use pantryplan_shared::shopping::ItemOrder;
use time::macros::date;

fn kitchen() -> anyhow::Result<Kitchen<MemoryStore>> {
    let mut kitchen = Kitchen::open(
        MemoryStore::default(),
        KitchenSettings {
            item_order: ItemOrder::Sorted,
            ..Default::default()
        },
    );
    kitchen.add_meal("Pasta", "pasta, tomato")?;
    kitchen.add_meal("Salad", "lettuce, tomato")?;
    kitchen.add_pantry_item("tomato")?;

    Ok(kitchen)
}

fn render(kitchen: &Kitchen<MemoryStore>, view: View) -> anyhow::Result<String> {
    let mut presenter = TerminalPresenter::new(Vec::new(), view).with_week_of(date!(2025 - 01 - 22));
    kitchen.present(&mut presenter)?;

    Ok(String::from_utf8(presenter.into_inner())?)
}

#[test]
fn test_meals_view_lists_indices() -> anyhow::Result<()> {
    let output = render(&kitchen()?, View::Meals)?;

    assert!(output.starts_with("Meals"));
    assert!(output.contains("[0] Pasta: pasta, tomato"));
    assert!(output.contains("[1] Salad: lettuce, tomato"));
    assert!(!output.contains("Pantry"));

    Ok(())
}

#[test]
fn test_empty_collections() -> anyhow::Result<()> {
    let kitchen = Kitchen::open(MemoryStore::default(), KitchenSettings::default());

    let output = render(&kitchen, View::All)?;

    assert!(output.contains("No meals yet."));
    assert!(output.contains("Pantry is empty."));
    assert!(output.contains("Nothing to buy."));
    assert_eq!(output.matches("(no meal)").count(), 7);

    Ok(())
}

#[test]
fn test_plan_view_shows_week_and_shopping_list() -> anyhow::Result<()> {
    let mut kitchen = kitchen()?;
    kitchen.generate_plan(&mut PlanGenerator::seeded(PlanPolicy::Scored, 5));

    let output = render(&kitchen, View::Plan)?;

    assert!(output.starts_with("Week of 2025-01-20"));
    assert!(output.contains("Monday"));
    assert!(output.contains("Jan 20"));
    assert!(output.contains("Sunday"));
    assert!(output.contains("Jan 26"));
    assert_eq!(output.matches("(no meal)").count(), 5);
    assert!(output.contains("Shopping list\n  - lettuce\n  - pasta"));

    Ok(())
}

#[test]
fn test_shopping_view_only() -> anyhow::Result<()> {
    let mut kitchen = kitchen()?;
    kitchen.generate_plan(&mut PlanGenerator::seeded(PlanPolicy::Scored, 5));

    let output = render(&kitchen, View::Shopping)?;

    assert_eq!(output, "Shopping list\n  - lettuce\n  - pasta\n");

    Ok(())
}
