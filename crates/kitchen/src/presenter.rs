use pantryplan_shared::meal::{Meal, Pantry};
use pantryplan_shared::mealplan::WeeklyPlan;
use pantryplan_shared::shopping::ShoppingList;

/// What a presenter gets to render: the collections, the current plan and
/// the shopping list derived from them.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot<'a> {
    pub meals: &'a [Meal],
    pub pantry: &'a Pantry,
    pub plan: &'a WeeklyPlan,
    pub shopping_list: ShoppingList,
}

/// Presentation collaborator. The kitchen never renders anything itself.
pub trait Presenter {
    fn present(&mut self, snapshot: &Snapshot<'_>) -> pantryplan_shared::Result<()>;
}

/// Keeps owned copies of every snapshot it receives.
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    pub frames: Vec<Frame>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub meals: Vec<Meal>,
    pub pantry: Pantry,
    pub plan: WeeklyPlan,
    pub shopping_list: ShoppingList,
}

impl Presenter for RecordingPresenter {
    fn present(&mut self, snapshot: &Snapshot<'_>) -> pantryplan_shared::Result<()> {
        self.frames.push(Frame {
            meals: snapshot.meals.to_vec(),
            pantry: snapshot.pantry.clone(),
            plan: snapshot.plan.clone(),
            shopping_list: snapshot.shopping_list.clone(),
        });

        Ok(())
    }
}
