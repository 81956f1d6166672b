mod history_entries;
