use std::path::{Path, PathBuf};

use goalpost_core::data_files;
use goalpost_core::models::category::Category;
use goalpost_core::models::goal::Goal;
use goalpost_core::models::user::{GoalAction, User};

use crate::collections::{load_collection, save_collection};
use crate::error::StorageError;

/// In-memory copy of every collection, plus the logged-in user.
///
/// Goals and categories are read-only for the lifetime of the process. Users
/// are rewritten to disk in full on every mutation, and the in-memory copy is
/// only swapped in once that write has succeeded.
#[derive(Debug)]
pub struct Store {
    users_path: PathBuf,
    goals: Vec<Goal>,
    categories: Vec<Category>,
    users: Vec<User>,
}

impl Store {
    /// Read `categories.json`, `goals.json` and `users.json` from `data_dir`.
    pub fn load(data_dir: &Path) -> Result<Self, StorageError> {
        let categories = load_collection(&data_files::categories(data_dir))?;
        let goals = load_collection(&data_files::goals(data_dir))?;
        let users = load_collection(&data_files::users(data_dir))?;

        Ok(Self {
            users_path: data_files::users(data_dir),
            goals,
            categories,
            users,
        })
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// The hardcoded "logged in" user: the first entry in `users.json`.
    pub fn current_user(&self) -> Option<&User> {
        self.users.first()
    }

    pub fn current_user_slot(&self) -> Option<usize> {
        (!self.users.is_empty()).then_some(0)
    }

    pub fn find_goal(&self, goal_id: &str) -> Option<&Goal> {
        self.goals.iter().find(|goal| goal.id.matches(goal_id))
    }

    pub fn find_category(&self, category_id: &str) -> Option<&Category> {
        self.categories
            .iter()
            .find(|category| category.id.matches(category_id))
    }

    /// Position of the user with `user_id`, for use with [`Store::record_goal`].
    pub fn user_slot(&self, user_id: &str) -> Option<usize> {
        self.users.iter().position(|user| user.id.matches(user_id))
    }

    /// Goals whose `categoryId` refers to `category_id`, in stored order.
    pub fn goals_in_category(&self, category_id: &str) -> Vec<&Goal> {
        self.goals
            .iter()
            .filter(|goal| goal.in_category(category_id))
            .collect()
    }

    /// Append `goal` to one of the user's lists and persist every user.
    ///
    /// On a failed write the store is left exactly as it was.
    pub fn record_goal(
        &mut self,
        slot: usize,
        action: GoalAction,
        goal: Goal,
    ) -> Result<&User, StorageError> {
        let mut users = self.users.clone();
        users
            .get_mut(slot)
            .ok_or(StorageError::UnknownUser(slot))?
            .record(action, goal);

        save_collection(&self.users_path, &users)?;
        self.users = users;

        Ok(&self.users[slot])
    }
}
