use std::fmt::Display;

use anyhow::Result;
use serde::Serialize;
use serde_json::Value;

/// Prints store results either as JSON or as tab-separated tables
pub struct Output {
    json: bool,
}

impl Output {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    /// Print homogeneous rows; the header is the rows' column names
    pub fn rows<T: Serialize>(&self, rows: &[T]) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(rows)?);
            return Ok(());
        }

        if rows.is_empty() {
            println!("(no rows)");
            return Ok(());
        }

        let rows = rows
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()?;

        if let Some(Value::Object(first)) = rows.first() {
            let header: Vec<&str> = first.keys().map(String::as_str).collect();
            println!("{}", header.join("\t"));
        }
        for row in &rows {
            if let Value::Object(map) = row {
                let cells: Vec<String> = map.values().map(cell).collect();
                println!("{}", cells.join("\t"));
            }
        }
        Ok(())
    }

    /// Print one record as `column: value` lines
    pub fn record<T: Serialize>(&self, record: &T) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(record)?);
            return Ok(());
        }

        match serde_json::to_value(record)? {
            Value::Object(map) => {
                for (key, value) in &map {
                    println!("{key}: {}", cell(value));
                }
            }
            other => println!("{}", cell(&other)),
        }
        Ok(())
    }

    /// Print a value whose human form is its `Display` impl
    pub fn summary<T: Serialize + Display>(&self, value: &T) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            println!("{value}");
        }
        Ok(())
    }

    /// Print an optional derived result, reporting `None` as insufficient data
    pub fn optional<T: Serialize>(&self, value: Option<&T>, why: &str) -> Result<()> {
        match value {
            Some(value) => self.record(value),
            None if self.json => {
                println!("null");
                Ok(())
            }
            None => {
                println!("insufficient data: {why}");
                Ok(())
            }
        }
    }

    pub fn created(&self, entity: &str, id: i64) -> Result<()> {
        if self.json {
            println!("{}", serde_json::json!({ "id": id }));
        } else {
            println!("Created {entity} {id}");
        }
        Ok(())
    }

    pub fn updated(&self, entity: &str, id: i64) -> Result<()> {
        if self.json {
            println!("{}", serde_json::json!({ "id": id }));
        } else {
            println!("Updated {entity} {id}");
        }
        Ok(())
    }
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
