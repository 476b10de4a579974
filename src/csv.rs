use crate::error::CatalogError;
use crate::logger;
use crate::models::{Animal, Category, Diet};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

pub const CATALOG_COLUMNS: [&str; 7] = [
    "id",
    "name",
    "category",
    "diet",
    "habitat",
    "fun_fact",
    "image_url",
];

pub fn get_catalog_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();

    if dir.is_dir()
        && let Ok(entries) = fs::read_dir(dir)
    {
        for entry in entries.flatten() {
            if let Some(ext) = entry.path().extension()
                && ext == "csv"
            {
                files.push(entry.path());
            }
        }
    }

    files.sort();
    files
}

pub fn load_catalog(path: &Path) -> Result<Vec<Animal>, CatalogError> {
    let content = fs::read_to_string(path)?;
    let animals = parse_catalog(&content)?;
    logger::log(&format!(
        "Loaded {} animals from {}",
        animals.len(),
        path.display()
    ));
    Ok(animals)
}

/// Parses catalog CSV text. A leading header row starting with `id` is
/// skipped, as are blank lines and `#` comments.
pub fn parse_catalog(content: &str) -> Result<Vec<Animal>, CatalogError> {
    let mut animals = Vec::new();
    let mut seen_ids = HashSet::new();
    let mut seen_names = HashSet::new();

    for (i, line) in content.lines().enumerate() {
        let line_number = i + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let fields = parse_csv_line(line);
        if animals.is_empty() && fields.first().map(|f| f.trim()) == Some("id") {
            continue;
        }

        let animal = parse_animal(line_number, &fields)?;
        if !seen_ids.insert(animal.id.clone()) {
            return Err(CatalogError::Duplicate {
                line: line_number,
                value: animal.id,
            });
        }
        if !seen_names.insert(animal.name.clone()) {
            return Err(CatalogError::Duplicate {
                line: line_number,
                value: animal.name,
            });
        }
        animals.push(animal);
    }

    if animals.is_empty() {
        return Err(CatalogError::Empty);
    }
    Ok(animals)
}

fn parse_animal(line: usize, fields: &[String]) -> Result<Animal, CatalogError> {
    let field = |index: usize, required: bool| -> Result<String, CatalogError> {
        let name = CATALOG_COLUMNS[index];
        let value = fields
            .get(index)
            .map(|f| f.trim().to_string())
            .ok_or(CatalogError::MissingField { line, field: name })?;
        if required && value.is_empty() {
            return Err(CatalogError::EmptyField { line, field: name });
        }
        Ok(value)
    };

    let category_raw = field(2, true)?;
    let category = category_raw
        .parse::<Category>()
        .map_err(|_| CatalogError::UnknownCategory {
            line,
            value: category_raw.clone(),
        })?;
    let diet_raw = field(3, true)?;
    let diet = diet_raw
        .parse::<Diet>()
        .map_err(|_| CatalogError::UnknownDiet {
            line,
            value: diet_raw.clone(),
        })?;

    Ok(Animal {
        id: field(0, true)?,
        name: field(1, true)?,
        category,
        diet,
        habitat: field(4, true)?,
        fun_fact: field(5, true)?,
        image_url: field(6, false)?,
    })
}

/// Splits one CSV line into fields. Quoted fields may contain commas, and a
/// doubled quote inside them stands for a literal quote.
pub fn parse_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut chars = line.chars().peekable();
    let mut in_quotes = false;

    while let Some(c) = chars.next() {
        match c {
            '"' if !in_quotes && current.trim().is_empty() => {
                current.clear();
                in_quotes = true;
            }
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    current.push('"');
                } else {
                    in_quotes = false;
                }
            }
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            _ => {
                current.push(c);
            }
        }
    }

    fields.push(current);
    fields
}
