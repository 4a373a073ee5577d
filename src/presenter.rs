use askama::Template;
use pantryplan_kitchen::{Presenter, Snapshot};
use pantryplan_mealplan::week_dates;
use pantryplan_shared::meal::Meal;
use pantryplan_shared::mealplan::WeeklyPlan;
use std::io::Write;
use strum::{AsRefStr, Display, EnumString};
use time::Date;
use time::macros::format_description;

const EMPTY_SLOT: &str = "(no meal)";

/// Which part of a snapshot gets rendered.
#[derive(EnumString, Display, AsRefStr, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
pub enum View {
    #[default]
    All,
    Meals,
    Pantry,
    Plan,
    Shopping,
}

#[derive(Template)]
#[template(path = "meals.txt")]
struct MealsTemplate<'a> {
    meals: &'a [Meal],
}

#[derive(Template)]
#[template(path = "pantry.txt")]
struct PantryTemplate<'a> {
    items: &'a [String],
}

struct PlanRow {
    day: String,
    date: String,
    meal: String,
}

#[derive(Template)]
#[template(path = "plan.txt")]
struct PlanTemplate {
    week_of: Date,
    rows: Vec<PlanRow>,
}

#[derive(Template)]
#[template(path = "shopping.txt")]
struct ShoppingTemplate<'a> {
    items: &'a [String],
}

/// Renders snapshots as plain text to any writer.
pub struct TerminalPresenter<W: Write> {
    out: W,
    view: View,
    week_of: Date,
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W, view: View) -> Self {
        Self {
            out,
            view,
            week_of: pantryplan_mealplan::today(),
        }
    }

    /// Dates shown next to plan days are those of the week containing `date`.
    pub fn with_week_of(mut self, date: Date) -> Self {
        self.week_of = date;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn plan_template(&self, plan: &WeeklyPlan) -> pantryplan_shared::Result<PlanTemplate> {
        let format = format_description!("[month repr:short] [day]");
        let dates = week_dates(self.week_of);

        let rows = plan
            .days()
            .zip(dates)
            .map(|((day, meal), date)| -> pantryplan_shared::Result<PlanRow> {
                Ok(PlanRow {
                    day: format!("{:<9}", day.to_string()),
                    date: date.format(&format).map_err(anyhow::Error::from)?,
                    meal: meal.map_or_else(|| EMPTY_SLOT.to_owned(), |m| m.name.to_owned()),
                })
            })
            .collect::<pantryplan_shared::Result<Vec<_>>>()?;

        Ok(PlanTemplate {
            week_of: dates[0],
            rows,
        })
    }

    fn write(&mut self, template: &impl Template) -> pantryplan_shared::Result<()> {
        let rendered = template.render().map_err(anyhow::Error::from)?;
        writeln!(self.out, "{}", rendered.trim_end())?;

        Ok(())
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn present(&mut self, snapshot: &Snapshot<'_>) -> pantryplan_shared::Result<()> {
        let meals = MealsTemplate {
            meals: snapshot.meals,
        };
        let pantry = PantryTemplate {
            items: snapshot.pantry.as_slice(),
        };
        let shopping = ShoppingTemplate {
            items: snapshot.shopping_list.items(),
        };

        match self.view {
            View::Meals => self.write(&meals)?,
            View::Pantry => self.write(&pantry)?,
            View::Plan => {
                let plan = self.plan_template(snapshot.plan)?;
                self.write(&plan)?;
                writeln!(self.out)?;
                self.write(&shopping)?;
            }
            View::Shopping => self.write(&shopping)?,
            View::All => {
                let plan = self.plan_template(snapshot.plan)?;
                self.write(&meals)?;
                writeln!(self.out)?;
                self.write(&pantry)?;
                writeln!(self.out)?;
                self.write(&plan)?;
                writeln!(self.out)?;
                self.write(&shopping)?;
            }
        }

        self.out.flush()?;

        Ok(())
    }
}
