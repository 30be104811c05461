//! Default roster a fresh store ships with.

use ulid::Ulid;

use crate::model::{Tool, User};
use crate::store::Store;

pub fn default_users() -> Vec<User> {
    [
        "Ana Silva",
        "Bruno Santos",
        "Carla Dias",
        "Diogo Costa",
        "Elena Sousa",
        "Fabio Lima",
        "Gisela Novo",
        "Hugo Vale",
        "Ines Pires",
        "Joao Cruz",
    ]
    .into_iter()
    .enumerate()
    .map(|(i, name)| User {
        id: Ulid::new(),
        name: name.to_string(),
        avatar_url: format!("https://picsum.photos/seed/u{}/200/200", i + 1),
    })
    .collect()
}

pub fn default_tools() -> Vec<Tool> {
    fn tool(name: &str, color: &str, description: &str) -> Tool {
        let mut t = Tool::new(name, color);
        t.description = Some(description.to_string());
        t
    }

    vec![
        tool("GPT-4 Turbo", "#3b82f6", "High reasoning model"),
        tool("Midjourney V6", "#06b6d4", "Image generation"),
        tool("Claude 3 Opus", "#f97316", "Large context window"),
        tool("Gemini Pro", "#10b981", "Google Multimodal"),
    ]
}

/// Seeded store: full roster, no reservations yet.
pub fn seed_store() -> Store {
    Store {
        users: default_users(),
        tools: default_tools(),
        reservations: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_store_has_roster_and_no_bookings() {
        let store = seed_store();
        assert_eq!(store.users.len(), 10);
        assert_eq!(store.tools.len(), 4);
        assert!(store.reservations.is_empty());
    }

    #[test]
    fn seeded_ids_are_unique() {
        let store = seed_store();
        let mut ids: Vec<Ulid> = store
            .users
            .iter()
            .map(|u| u.id)
            .chain(store.tools.iter().map(|t| t.id))
            .collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), store.users.len() + store.tools.len());
    }
}
