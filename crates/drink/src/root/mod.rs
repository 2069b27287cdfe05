use std::ops::Deref;

use serde::Deserialize;
use validator::Validate;
use wsid_suggestion::{Drink, normalize_tag};

use crate::repository;

#[derive(Clone)]
pub struct Command {
    state: wsid_shared::State,
}

impl Deref for Command {
    type Target = wsid_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.state
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateDrinkInput {
    #[validate(length(max = 100))]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 500))]
    pub description: Option<String>,
    #[serde(default)]
    #[validate(length(max = 30))]
    pub ingredients: Vec<String>,
    #[serde(default)]
    #[validate(length(max = 30))]
    pub steps: Vec<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

impl Command {
    pub fn new(state: wsid_shared::State) -> Self {
        Self { state }
    }

    /// Saves a drink. Saving the same name and ingredients twice returns the
    /// stored drink. Tags are inferred when none are given.
    #[tracing::instrument(skip_all, fields(name = %input.name))]
    pub async fn create(&self, input: CreateDrinkInput) -> wsid_shared::Result<Drink> {
        input.validate()?;

        let name = input.name.trim();
        if name.is_empty() {
            wsid_shared::user!("Missing drink name");
        }

        let tags = input
            .tags
            .unwrap_or_default()
            .into_iter()
            .filter_map(|t| normalize_tag(&t));

        let mut drink = Drink::new(
            name,
            input.description.unwrap_or_default(),
            input.ingredients,
            input.steps,
        )
        .with_tags(tags);
        drink.ensure_tags();

        self.save(&drink).await
    }

    /// Stores an already built drink, such as one from the generator.
    pub async fn save(&self, drink: &Drink) -> wsid_shared::Result<Drink> {
        let created = repository::create(&self.write_db, drink).await?;

        if created {
            tracing::info!(drink_id = %drink.id, "Drink saved");
        } else {
            tracing::debug!(drink_id = %drink.id, "Drink already stored");
        }

        let Some(stored) = repository::find(&self.write_db, &drink.id).await? else {
            wsid_shared::bail!("Drink {} not found after save", drink.id);
        };

        Ok(stored)
    }

    pub async fn find(&self, id: impl AsRef<str>) -> wsid_shared::Result<Option<Drink>> {
        repository::find(&self.read_db, id.as_ref()).await
    }

    pub(crate) async fn ensure_exists(&self, id: &str) -> wsid_shared::Result<()> {
        if !repository::exists(&self.read_db, id).await? {
            wsid_shared::not_found!("drink");
        }

        Ok(())
    }
}
