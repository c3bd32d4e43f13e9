use linkcollection::error::{EntityKind, LinkError, Result};
use linkcollection::models::{Folder, Tag};
use linkcollection::LinkStore;
use std::io::{self, Write};

/// Find a folder by id, falling back to a case-insensitive name match
pub fn resolve_folder(store: &LinkStore, key: &str) -> Result<Folder> {
    let folders = store.get_folders();
    find_by_id_or_name(folders, key, |f| (&f.id, &f.name))
        .ok_or_else(|| LinkError::not_found(EntityKind::Folder, key))
}

/// Find a tag by id, falling back to a case-insensitive name match
pub fn resolve_tag(store: &LinkStore, key: &str) -> Result<Tag> {
    let tags = store.get_tags();
    find_by_id_or_name(tags, key, |t| (&t.id, &t.name))
        .ok_or_else(|| LinkError::not_found(EntityKind::Tag, key))
}

/// Resolve each key to a tag id, failing on the first unknown one
pub fn resolve_tag_ids(store: &LinkStore, keys: &[String]) -> Result<Vec<String>> {
    let tags = store.get_tags();
    let mut ids: Vec<String> = Vec::with_capacity(keys.len());
    for key in keys.iter().map(|k| k.trim()).filter(|k| !k.is_empty()) {
        let tag = find_by_id_or_name(tags.clone(), key, |t| (&t.id, &t.name))
            .ok_or_else(|| LinkError::not_found(EntityKind::Tag, key))?;
        if !ids.contains(&tag.id) {
            ids.push(tag.id);
        }
    }
    Ok(ids)
}

/// Folder id for a `--folder` value; empty means uncategorized
pub fn resolve_folder_id(store: &LinkStore, key: &str) -> Result<String> {
    if key.is_empty() {
        Ok(String::new())
    } else {
        Ok(resolve_folder(store, key)?.id)
    }
}

fn find_by_id_or_name<T>(
    items: Vec<T>,
    key: &str,
    fields: impl Fn(&T) -> (&String, &String),
) -> Option<T> {
    let by_id = items.iter().position(|item| fields(item).0 == key);
    let index = by_id.or_else(|| {
        items
            .iter()
            .position(|item| fields(item).1.eq_ignore_ascii_case(key))
    })?;
    items.into_iter().nth(index)
}

/// Turn validation messages into an error
pub fn ensure_valid(errors: Vec<String>) -> Result<()> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(LinkError::InvalidInput(errors.join("; ")))
    }
}

/// Ask a y/N question on stdout; anything but y/yes declines
pub fn confirm(prompt: &str) -> Result<bool> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut response = String::new();
    io::stdin().read_line(&mut response)?;
    let response = response.trim().to_lowercase();
    Ok(response == "y" || response == "yes")
}
