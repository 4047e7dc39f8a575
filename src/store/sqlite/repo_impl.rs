//! NoteStore trait implementation for SqliteStore.

use super::SqliteStore;
use crate::domain::{Note, NoteId, Tag};
use crate::store::{NoteStore, NotebookRecord, StoreError, StoreResult, TagWithCount};
use chrono::{DateTime, Utc};

/// Escapes LIKE wildcards so patterns match literally. Used with `ESCAPE '\'`.
fn escape_like(pattern: &str) -> String {
    let mut escaped = String::with_capacity(pattern.len());
    for c in pattern.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn parse_timestamp(value: &str, field: &str) -> StoreResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| StoreError::Runtime(format!("invalid {} timestamp in storage: {}", field, e)))
}

impl SqliteStore {
    fn notebook_id(&self, name: &str) -> StoreResult<Option<i64>> {
        match self
            .conn
            .query_row("SELECT id FROM notebooks WHERE name = ?", [name], |row| {
                row.get(0)
            }) {
            Ok(id) => Ok(Some(id)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(StoreError::Execution(e)),
        }
    }

    fn require_notebook_id(&self, name: &str) -> StoreResult<i64> {
        self.notebook_id(name)?
            .ok_or_else(|| StoreError::Check(format!("notebook `{}` does not exist", name)))
    }

    fn tags_of(&self, uuid: &str) -> StoreResult<Vec<Tag>> {
        let mut stmt = self.conn.prepare(
            "SELECT t.name FROM tags t
             JOIN note_tags nt ON t.id = nt.tag_id
             WHERE nt.note_uuid = ?
             ORDER BY t.name",
        )?;
        let tags = stmt
            .query_map([uuid], |row| row.get::<_, String>(0))?
            .filter_map(|r| r.ok())
            .filter_map(|name| Tag::new(&name).ok())
            .collect();
        Ok(tags)
    }

    fn notes_from_uuids(&self, uuids: Vec<String>) -> StoreResult<Vec<Note>> {
        let mut notes = Vec::with_capacity(uuids.len());
        for uuid in uuids {
            let id: NoteId = uuid
                .parse()
                .map_err(|e| StoreError::Runtime(format!("invalid UUID in storage: {}", e)))?;
            if let Some(note) = self.get_note(&id)? {
                notes.push(note);
            }
        }
        Ok(notes)
    }

    fn query_uuids(
        &self,
        sql: &str,
        params: impl rusqlite::Params,
    ) -> StoreResult<Vec<String>> {
        let mut stmt = self.conn.prepare(sql)?;
        let uuids = stmt
            .query_map(params, |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(uuids)
    }
}

impl NoteStore for SqliteStore {
    // ===========================================
    // Notes
    // ===========================================

    fn create_note(&mut self, note: &Note, notebook: &str) -> StoreResult<()> {
        let nb_id = self.require_notebook_id(notebook)?;
        let uuid = note.id().to_string();
        let now = Utc::now().to_rfc3339();

        let tx = self.transaction()?;

        tx.execute(
            "INSERT INTO notes (uuid, title, content, created, modified)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            rusqlite::params![
                uuid,
                note.title(),
                note.content(),
                note.created().to_rfc3339(),
                note.modified().to_rfc3339(),
            ],
        )?;

        tx.execute(
            "INSERT INTO note_notebooks (note_uuid, notebook_id) VALUES (?1, ?2)",
            rusqlite::params![uuid, nb_id],
        )?;

        for tag in note.tags() {
            tx.execute(
                "INSERT OR IGNORE INTO tags (name) VALUES (?)",
                [tag.as_str()],
            )?;
            tx.execute(
                "INSERT INTO note_tags (note_uuid, tag_id)
                 SELECT ?, id FROM tags WHERE name = ?",
                [uuid.as_str(), tag.as_str()],
            )?;
        }

        tx.execute(
            "UPDATE notebooks SET modified = ?1 WHERE id = ?2",
            rusqlite::params![now, nb_id],
        )?;

        tx.commit()
    }

    fn get_note(&self, id: &NoteId) -> StoreResult<Option<Note>> {
        let mut stmt = self.conn.prepare(
            "SELECT uuid, title, content, created, modified FROM notes WHERE uuid = ?",
        )?;

        let row = stmt.query_row([id.to_string()], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, String>(4)?,
            ))
        });

        let (uuid, title, content, created_str, modified_str) = match row {
            Ok(row) => row,
            Err(rusqlite::Error::QueryReturnedNoRows) => return Ok(None),
            Err(e) => return Err(StoreError::Execution(e)),
        };

        let created = parse_timestamp(&created_str, "created")?;
        let modified = parse_timestamp(&modified_str, "modified")?;
        let tags = self.tags_of(&uuid)?;

        let note = Note::new(id.clone(), title, content, created, modified, tags)
            .map_err(|e| StoreError::Runtime(format!("invalid note in storage: {}", e)))?;
        Ok(Some(note))
    }

    fn update_note(&mut self, note: &Note) -> StoreResult<()> {
        let uuid = note.id().to_string();

        let tx = self.transaction()?;

        let rows = tx.execute(
            "UPDATE notes SET title = ?1, content = ?2, modified = ?3 WHERE uuid = ?4",
            rusqlite::params![
                note.title(),
                note.content(),
                note.modified().to_rfc3339(),
                uuid,
            ],
        )?;
        if rows == 0 {
            tx.rollback()?;
            return Err(StoreError::Check(format!("note `{}` not found", note.id())));
        }

        tx.execute("DELETE FROM note_tags WHERE note_uuid = ?", [uuid.as_str()])?;
        for tag in note.tags() {
            tx.execute(
                "INSERT OR IGNORE INTO tags (name) VALUES (?)",
                [tag.as_str()],
            )?;
            tx.execute(
                "INSERT INTO note_tags (note_uuid, tag_id)
                 SELECT ?, id FROM tags WHERE name = ?",
                [uuid.as_str(), tag.as_str()],
            )?;
        }

        tx.commit()
    }

    fn delete_note(&mut self, id: &NoteId) -> StoreResult<()> {
        let rows = self
            .conn
            .execute("DELETE FROM notes WHERE uuid = ?", [id.to_string()])?;
        if rows == 0 {
            return Err(StoreError::Check(format!("note `{}` not found", id)));
        }
        Ok(())
    }

    fn move_note(&mut self, id: &NoteId, notebook: &str) -> StoreResult<()> {
        let nb_id = self.require_notebook_id(notebook)?;
        let now = Utc::now().to_rfc3339();

        let tx = self.transaction()?;

        let rows = tx.execute(
            "UPDATE note_notebooks SET notebook_id = ?1 WHERE note_uuid = ?2",
            rusqlite::params![nb_id, id.to_string()],
        )?;
        if rows == 0 {
            tx.rollback()?;
            return Err(StoreError::Check(format!("note `{}` not found", id)));
        }

        tx.execute(
            "UPDATE notebooks SET modified = ?1 WHERE id = ?2",
            rusqlite::params![now, nb_id],
        )?;

        tx.commit()
    }

    fn notebook_of(&self, id: &NoteId) -> StoreResult<Option<String>> {
        match self.conn.query_row(
            "SELECT b.name FROM notebooks b
             JOIN note_notebooks nn ON nn.notebook_id = b.id
             WHERE nn.note_uuid = ?",
            [id.to_string()],
            |row| row.get::<_, String>(0),
        ) {
            Ok(name) => Ok(Some(name)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(StoreError::Execution(e)),
        }
    }

    fn notes_in_notebook(&self, notebook: &str, limit: Option<usize>) -> StoreResult<Vec<Note>> {
        let nb_id = self.require_notebook_id(notebook)?;

        let uuids = match limit {
            Some(limit) => self.query_uuids(
                "SELECT n.uuid FROM notes n
                 JOIN note_notebooks nn ON n.uuid = nn.note_uuid
                 WHERE nn.notebook_id = ?1
                 ORDER BY n.modified DESC
                 LIMIT ?2",
                rusqlite::params![nb_id, limit as i64],
            )?,
            None => self.query_uuids(
                "SELECT n.uuid FROM notes n
                 JOIN note_notebooks nn ON n.uuid = nn.note_uuid
                 WHERE nn.notebook_id = ?1
                 ORDER BY n.modified DESC",
                rusqlite::params![nb_id],
            )?,
        };

        self.notes_from_uuids(uuids)
    }

    // ===========================================
    // Notebooks
    // ===========================================

    fn create_notebook(&mut self, name: &str) -> StoreResult<()> {
        if self.notebook_id(name)?.is_some() {
            return Err(StoreError::Check(format!(
                "notebook `{}` already exists",
                name
            )));
        }
        let now = Utc::now().to_rfc3339();
        self.conn.execute(
            "INSERT INTO notebooks (name, created, modified) VALUES (?1, ?2, ?2)",
            rusqlite::params![name, now],
        )?;
        Ok(())
    }

    fn ensure_notebook(&mut self, name: &str) -> StoreResult<bool> {
        let now = Utc::now().to_rfc3339();
        let rows = self.conn.execute(
            "INSERT OR IGNORE INTO notebooks (name, created, modified) VALUES (?1, ?2, ?2)",
            rusqlite::params![name, now],
        )?;
        Ok(rows > 0)
    }

    fn get_notebook(&self, name: &str) -> StoreResult<Option<NotebookRecord>> {
        let row = self.conn.query_row(
            "SELECT b.name, b.created, b.modified,
                    (SELECT COUNT(*) FROM note_notebooks nn WHERE nn.notebook_id = b.id)
             FROM notebooks b WHERE b.name = ?",
            [name],
            |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, i64>(3)?,
                ))
            },
        );

        let (name, created_str, modified_str, count) = match row {
            Ok(row) => row,
            Err(rusqlite::Error::QueryReturnedNoRows) => return Ok(None),
            Err(e) => return Err(StoreError::Execution(e)),
        };

        Ok(Some(NotebookRecord::new(
            name,
            parse_timestamp(&created_str, "created")?,
            parse_timestamp(&modified_str, "modified")?,
            count as usize,
        )))
    }

    fn list_notebooks(&self) -> StoreResult<Vec<NotebookRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT b.name, b.created, b.modified,
                    (SELECT COUNT(*) FROM note_notebooks nn WHERE nn.notebook_id = b.id)
             FROM notebooks b ORDER BY b.name",
        )?;

        let rows = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, i64>(3)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        let mut notebooks = Vec::with_capacity(rows.len());
        for (name, created_str, modified_str, count) in rows {
            notebooks.push(NotebookRecord::new(
                name,
                parse_timestamp(&created_str, "created")?,
                parse_timestamp(&modified_str, "modified")?,
                count as usize,
            ));
        }
        Ok(notebooks)
    }

    fn rename_notebook(&mut self, old: &str, new: &str) -> StoreResult<()> {
        self.require_notebook_id(old)?;
        if self.notebook_id(new)?.is_some() {
            return Err(StoreError::Check(format!(
                "notebook `{}` already exists",
                new
            )));
        }
        let now = Utc::now().to_rfc3339();
        self.conn.execute(
            "UPDATE notebooks SET name = ?1, modified = ?2 WHERE name = ?3",
            rusqlite::params![new, now, old],
        )?;
        Ok(())
    }

    fn delete_notebook(&mut self, name: &str) -> StoreResult<()> {
        let record = self
            .get_notebook(name)?
            .ok_or_else(|| StoreError::Check(format!("notebook `{}` does not exist", name)))?;
        if record.note_count() > 0 {
            return Err(StoreError::Check(format!(
                "notebook `{}` is not empty",
                name
            )));
        }
        self.conn
            .execute("DELETE FROM notebooks WHERE name = ?", [name])?;
        Ok(())
    }

    fn move_all_notes(&mut self, from: &str, to: &str) -> StoreResult<usize> {
        let from_id = self.require_notebook_id(from)?;
        let to_id = self.require_notebook_id(to)?;
        let now = Utc::now().to_rfc3339();

        let tx = self.transaction()?;
        let rows = tx.execute(
            "UPDATE note_notebooks SET notebook_id = ?1 WHERE notebook_id = ?2",
            rusqlite::params![to_id, from_id],
        )?;
        tx.execute(
            "UPDATE notebooks SET modified = ?1 WHERE id = ?2",
            rusqlite::params![now, to_id],
        )?;
        tx.commit()?;
        Ok(rows)
    }

    fn clear_notebook(&mut self, name: &str) -> StoreResult<usize> {
        let nb_id = self.require_notebook_id(name)?;
        let rows = self.conn.execute(
            "DELETE FROM notes WHERE uuid IN
                 (SELECT note_uuid FROM note_notebooks WHERE notebook_id = ?)",
            [nb_id],
        )?;
        Ok(rows)
    }

    fn find_notebooks(&self, pattern: &str) -> StoreResult<Vec<NotebookRecord>> {
        let like = escape_like(pattern);
        let mut stmt = self.conn.prepare(
            "SELECT b.name FROM notebooks b
             WHERE b.name LIKE '%' || ?1 || '%' ESCAPE '\\'
             ORDER BY b.name",
        )?;
        let names = stmt
            .query_map([like], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;

        let mut notebooks = Vec::with_capacity(names.len());
        for name in names {
            if let Some(record) = self.get_notebook(&name)? {
                notebooks.push(record);
            }
        }
        Ok(notebooks)
    }

    // ===========================================
    // Tags
    // ===========================================

    fn all_tags_with_count(&self) -> StoreResult<Vec<TagWithCount>> {
        // LEFT JOIN keeps zero-count tags so they can be cleared.
        let mut stmt = self.conn.prepare(
            "SELECT t.name, COUNT(nt.note_uuid)
             FROM tags t
             LEFT JOIN note_tags nt ON t.id = nt.tag_id
             GROUP BY t.id
             ORDER BY t.name",
        )?;

        let tags = stmt
            .query_map([], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, u32>(1)?))
            })?
            .filter_map(|r| r.ok())
            .filter_map(|(name, count)| {
                Tag::new(&name).ok().map(|tag| TagWithCount::new(tag, count))
            })
            .collect();

        Ok(tags)
    }

    fn delete_tags(&mut self, tags: &[Tag]) -> StoreResult<usize> {
        let tx = self.transaction()?;
        let mut deleted = 0;
        for tag in tags {
            deleted += tx.execute("DELETE FROM tags WHERE name = ?", [tag.as_str()])?;
        }
        tx.commit()?;
        Ok(deleted)
    }

    fn rename_tag(&mut self, old: &Tag, new: &Tag) -> StoreResult<()> {
        let exists = |name: &str| -> StoreResult<bool> {
            match self
                .conn
                .query_row("SELECT 1 FROM tags WHERE name = ?", [name], |_| Ok(()))
            {
                Ok(()) => Ok(true),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(false),
                Err(e) => Err(StoreError::Execution(e)),
            }
        };

        if !exists(old.as_str())? {
            return Err(StoreError::Check(format!("tag `{}` does not exist", old)));
        }
        if exists(new.as_str())? {
            return Err(StoreError::Check(format!("tag `{}` already exists", new)));
        }

        self.conn.execute(
            "UPDATE tags SET name = ?1 WHERE name = ?2",
            [new.as_str(), old.as_str()],
        )?;
        Ok(())
    }

    // ===========================================
    // Search
    // ===========================================

    fn find_by_id_fragment(&self, fragment: &str) -> StoreResult<Vec<Note>> {
        let normalized: String = fragment
            .chars()
            .filter(|c| *c != '-')
            .collect::<String>()
            .to_lowercase();
        if normalized.is_empty() {
            return Ok(Vec::new());
        }

        let uuids = self.query_uuids(
            "SELECT uuid FROM notes
             WHERE REPLACE(uuid, '-', '') LIKE '%' || ?1 || '%' ESCAPE '\\'
             ORDER BY modified DESC",
            [escape_like(&normalized)],
        )?;
        self.notes_from_uuids(uuids)
    }

    fn find_by_title(&self, pattern: &str) -> StoreResult<Vec<Note>> {
        let uuids = self.query_uuids(
            "SELECT uuid FROM notes
             WHERE title LIKE '%' || ?1 || '%' ESCAPE '\\'
             ORDER BY modified DESC",
            [escape_like(pattern)],
        )?;
        self.notes_from_uuids(uuids)
    }

    fn find_by_content(&self, pattern: &str) -> StoreResult<Vec<Note>> {
        let uuids = self.query_uuids(
            "SELECT uuid FROM notes
             WHERE content LIKE '%' || ?1 || '%' ESCAPE '\\'
             ORDER BY modified DESC",
            [escape_like(pattern)],
        )?;
        self.notes_from_uuids(uuids)
    }

    fn find_by_tags(&self, tags: &[Tag]) -> StoreResult<Vec<Note>> {
        if tags.is_empty() {
            return Ok(Vec::new());
        }

        // A note matches when it carries every requested tag.
        let placeholders = vec!["?"; tags.len()].join(", ");
        let sql = format!(
            "SELECT n.uuid FROM notes n
             JOIN note_tags nt ON n.uuid = nt.note_uuid
             JOIN tags t ON nt.tag_id = t.id
             WHERE t.name IN ({})
             GROUP BY n.uuid
             HAVING COUNT(DISTINCT t.name) = {}
             ORDER BY n.modified DESC",
            placeholders,
            tags.len()
        );

        let mut stmt = self.conn.prepare(&sql)?;
        let uuids = stmt
            .query_map(
                rusqlite::params_from_iter(tags.iter().map(|t| t.as_str())),
                |row| row.get::<_, String>(0),
            )?
            .collect::<Result<Vec<_>, _>>()?;
        self.notes_from_uuids(uuids)
    }
}
