// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::Result;
use marea_app::{Message, TableSpec};
use std::path::PathBuf;

/// File-backed data provider. Paths are optional; the built-in demo fixtures
/// fill in whatever is not configured. Files are re-read on every load so a
/// reload in the shell picks up external edits.
pub struct FileRuntime {
    table_path: Option<PathBuf>,
    conversation_path: Option<PathBuf>,
    sticky_header: bool,
    sort_icons: bool,
}

impl FileRuntime {
    pub fn new(
        table_path: Option<PathBuf>,
        conversation_path: Option<PathBuf>,
        sticky_header: bool,
        sort_icons: bool,
    ) -> Self {
        Self {
            table_path,
            conversation_path,
            sticky_header,
            sort_icons,
        }
    }
}

impl marea_tui::AppRuntime for FileRuntime {
    fn load_table(&mut self) -> Result<TableSpec> {
        let mut table = match &self.table_path {
            Some(path) => marea_data::load_table(path)?,
            None => marea_data::demo_table(),
        };
        table.sticky_header = table.sticky_header && self.sticky_header;
        table.show_sort_icons = table.show_sort_icons && self.sort_icons;
        Ok(table)
    }

    fn load_conversation(&mut self) -> Result<Vec<Message>> {
        match &self.conversation_path {
            Some(path) => marea_data::load_conversation(path),
            None => Ok(marea_data::demo_conversation()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FileRuntime;
    use anyhow::Result;
    use marea_app::Role;
    use marea_testkit::MarketFaker;
    use marea_tui::AppRuntime;
    use std::io::Write;

    #[test]
    fn unconfigured_runtime_serves_demo_fixtures() -> Result<()> {
        let mut runtime = FileRuntime::new(None, None, true, true);
        let table = runtime.load_table()?;
        assert_eq!(table.caption.as_deref(), Some("Orders"));
        assert_eq!(table.rows.len(), 6);

        let messages = runtime.load_conversation()?;
        assert!(messages.iter().any(|message| message.role == Role::Result));
        Ok(())
    }

    #[test]
    fn configured_paths_override_demo_fixtures() -> Result<()> {
        let mut table = marea_data::demo_table();
        let mut faker = MarketFaker::new(8);
        table.rows = faker.order_rows(3);

        let mut table_file = tempfile::NamedTempFile::new()?;
        write!(table_file, "{}", serde_json::to_string(&table)?)?;

        let conversation = faker.conversation(1);
        let mut conversation_file = tempfile::NamedTempFile::new()?;
        write!(
            conversation_file,
            "{}",
            serde_json::to_string(&conversation)?
        )?;

        let mut runtime = FileRuntime::new(
            Some(table_file.path().to_owned()),
            Some(conversation_file.path().to_owned()),
            true,
            true,
        );
        assert_eq!(runtime.load_table()?.rows.len(), 3);
        assert_eq!(runtime.load_conversation()?.len(), 3);
        Ok(())
    }

    #[test]
    fn config_flags_mask_table_display_flags() -> Result<()> {
        let mut runtime = FileRuntime::new(None, None, false, false);
        let table = runtime.load_table()?;
        assert!(!table.sticky_header);
        assert!(!table.show_sort_icons);
        Ok(())
    }

    #[test]
    fn missing_table_file_surfaces_its_path() {
        let mut runtime = FileRuntime::new(
            Some(std::path::PathBuf::from("/nonexistent/orders.json")),
            None,
            true,
            true,
        );
        let error = runtime.load_table().expect_err("missing file should fail");
        assert!(format!("{error:#}").contains("/nonexistent/orders.json"));
    }
}
