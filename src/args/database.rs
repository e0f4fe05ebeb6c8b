use super::types::Args;
use crate::storage::sqlite::IN_MEMORY;
use std::path::Path;

impl Args {
    /// Check the database location, creating its directory if needed.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the database name is empty or its directory cannot be created
    pub fn validate(&mut self) -> Result<(), String> {
        let db_name = self.db_name.trim();
        if db_name.is_empty() {
            return Err("Database name is required".to_string());
        }
        self.db_name = db_name.to_string();

        if self.db_name == IN_MEMORY {
            return Ok(());
        }

        let Some(parent) = Path::new(&self.db_name).parent() else {
            return Ok(());
        };
        if !parent.as_os_str().is_empty() && !parent.is_dir() {
            std::fs::create_dir_all(parent).map_err(|e| {
                format!(
                    "Could not create database directory '{}': {e}",
                    parent.display()
                )
            })?;
        }
        Ok(())
    }
}
