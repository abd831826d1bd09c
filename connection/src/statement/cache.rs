//! Open-addressed cache of prepared statements, keyed by the hash of the
//! full SQL text. Lookup is a linear scan of the occupied prefix; the cache
//! is small and hot, so the scan beats any probing structure. Insertion is
//! round-robin, evicting whatever sits in the slot.

use std::ffi::CStr;
use std::hash::Hasher;
use std::os::raw::{c_char, c_int};
use std::ptr;
use std::ptr::NonNull;
use std::sync::Arc;

use fnv::FnvHasher;
use libsqlite3_sys::{
    sqlite3, sqlite3_clear_bindings, sqlite3_finalize, sqlite3_prepare_v2, sqlite3_reset,
    sqlite3_sql, sqlite3_stmt, SQLITE_OK,
};

use common::err::engine_error::SqliteError;
use common::err::CResult;

use crate::error::{check, db_error};

/// Statements with more SQL text than this are prepared fresh every time.
pub const MAX_CACHEABLE_BYTES: usize = 16 * 1024;

/// Marks an empty slot; a computed hash never takes this value.
pub const HASH_SENTINEL: u64 = 0;

pub const MAX_CACHE_SLOTS: usize = 16384;

/// Recycled statement shells kept per connection.
const MAX_FREE_SHELLS: usize = 32;

fn query_hash(text: &str) -> u64 {
    let mut hasher = FnvHasher::default();
    hasher.write(text.as_bytes());
    match hasher.finish() {
        HASH_SENTINEL => 0x9e37_79b9_7f4a_7c15,
        h => h,
    }
}

/// Where the statement's SQL text lives: SQLite's own copy suffices for a
/// single statement, multi-statement text is held so the remainder stays
/// valid for [`StatementCache::next`].
enum QueryText {
    Sqlite,
    Host(Arc<str>),
}

pub struct CachedStatement {
    stmt: Option<NonNull<sqlite3_stmt>>,
    text: QueryText,
    utf8_size: usize,
    query_size: usize,
    hash: u64,
}

impl CachedStatement {
    fn shell() -> Box<CachedStatement> {
        Box::new(CachedStatement {
            stmt: None,
            text: QueryText::Sqlite,
            utf8_size: 0,
            query_size: 0,
            hash: HASH_SENTINEL,
        })
    }

    pub fn handle(&self) -> Option<NonNull<sqlite3_stmt>> {
        self.stmt
    }

    pub fn utf8_size(&self) -> usize {
        self.utf8_size
    }

    /// Bytes consumed by the first statement in the text.
    pub fn query_size(&self) -> usize {
        self.query_size
    }

    pub fn has_more(&self) -> bool {
        self.query_size < self.utf8_size
    }

    pub fn is_cacheable(&self) -> bool {
        self.hash != HASH_SENTINEL
    }

    /// The full SQL text this statement was prepared from.
    pub fn full_text(&self) -> &str {
        match &self.text {
            QueryText::Host(text) => text,
            QueryText::Sqlite => match self.stmt {
                Some(stmt) => unsafe {
                    let sql = sqlite3_sql(stmt.as_ptr());
                    debug_assert!(!sql.is_null());
                    std::str::from_utf8_unchecked(CStr::from_ptr(sql).to_bytes())
                },
                None => "",
            },
        }
    }
}

impl Drop for CachedStatement {
    fn drop(&mut self) {
        // normal teardown goes through the cache; this only catches entries
        // abandoned on error paths
        if let Some(stmt) = self.stmt.take() {
            unsafe { sqlite3_finalize(stmt.as_ptr()) };
        }
    }
}

pub struct StatementCache {
    capacity: usize,
    hashes: Vec<u64>,
    slots: Vec<Option<Box<CachedStatement>>>,
    /// Upper bound on occupied indices; monotone over the cache lifetime.
    highest_used: usize,
    /// Cyclic insertion cursor.
    next_eviction: usize,
    free_shells: Vec<Box<CachedStatement>>,
}

impl StatementCache {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.min(MAX_CACHE_SLOTS);
        StatementCache {
            capacity,
            hashes: vec![HASH_SENTINEL; capacity],
            slots: (0..capacity).map(|_| None).collect(),
            highest_used: 0,
            next_eviction: 0,
            free_shells: Vec::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn highest_used(&self) -> usize {
        self.highest_used
    }

    pub fn resident_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Obtain a statement for `query`: a cache hit hands back the resident
    /// handle with its bindings cleared, a miss prepares fresh.
    pub fn prepare(&mut self, db: *mut sqlite3, query: &str) -> CResult<Box<CachedStatement>> {
        let hash = if self.capacity == 0 || query.len() > MAX_CACHEABLE_BYTES {
            HASH_SENTINEL
        } else {
            query_hash(query)
        };

        if hash != HASH_SENTINEL {
            let bound = self.highest_used.min(self.capacity.saturating_sub(1));
            for i in 0..=bound {
                if self.hashes[i] != hash {
                    continue;
                }
                let matches = match &self.slots[i] {
                    // same hash, different bytes is a benign collision
                    Some(entry) => {
                        entry.utf8_size == query.len() && entry.full_text() == query
                    }
                    None => false,
                };
                if matches {
                    self.hashes[i] = HASH_SENTINEL;
                    let entry = self.slots[i].take().expect("hash marked an occupied slot");
                    if let Some(stmt) = entry.stmt {
                        unsafe { sqlite3_clear_bindings(stmt.as_ptr()) };
                    }
                    return Ok(entry);
                }
            }
        }

        self.prepare_fresh(db, Arc::from(query), hash)
    }

    fn prepare_fresh(
        &mut self,
        db: *mut sqlite3,
        text: Arc<str>,
        hash: u64,
    ) -> CResult<Box<CachedStatement>> {
        // include the terminating NUL in the length so SQLite skips its
        // internal copy of the text
        let mut buf = Vec::with_capacity(text.len() + 1);
        buf.extend_from_slice(text.as_bytes());
        buf.push(0u8);

        let mut stmt: *mut sqlite3_stmt = ptr::null_mut();
        let mut tail: *const c_char = ptr::null();
        let rc = unsafe {
            sqlite3_prepare_v2(
                db,
                buf.as_ptr() as *const c_char,
                buf.len() as c_int,
                &mut stmt,
                &mut tail,
            )
        };
        if rc != SQLITE_OK {
            return Err(db_error("prepare", db, rc));
        }

        let consumed = unsafe { tail.offset_from(buf.as_ptr() as *const c_char) } as usize;
        let query_size = consumed.min(text.len());
        if query_size < text.len() && text.as_bytes()[query_size] == 0 {
            if !stmt.is_null() {
                unsafe { sqlite3_finalize(stmt) };
            }
            return Err(SqliteError::Value("null character in query".to_string()));
        }

        let stmt = NonNull::new(stmt);
        // comment- or directive-only SQL compiles to nothing and is not
        // worth a cache slot
        let hash = if stmt.is_none() { HASH_SENTINEL } else { hash };

        let mut shell = self.free_shells.pop().unwrap_or_else(CachedStatement::shell);
        shell.stmt = stmt;
        shell.utf8_size = text.len();
        shell.query_size = query_size;
        shell.hash = hash;
        shell.text = if query_size == text.len() && stmt.is_some() {
            QueryText::Sqlite
        } else {
            QueryText::Host(text)
        };
        Ok(shell)
    }

    /// Return a statement: cacheable ones go back into the round-robin slot,
    /// everything else is destroyed.
    pub fn finalize(&mut self, db: *mut sqlite3, entry: Box<CachedStatement>) -> CResult<()> {
        if entry.hash == HASH_SENTINEL || self.capacity == 0 {
            return self.destroy(db, entry);
        }
        if let Some(stmt) = entry.stmt {
            unsafe {
                sqlite3_reset(stmt.as_ptr());
                sqlite3_clear_bindings(stmt.as_ptr());
            }
        }

        let slot = self.next_eviction;
        if let Some(evicted) = self.slots[slot].take() {
            self.hashes[slot] = HASH_SENTINEL;
            if let Err(err) = self.destroy(db, evicted) {
                let _ = self.destroy(db, entry);
                return Err(err);
            }
        }
        self.hashes[slot] = entry.hash;
        self.slots[slot] = Some(entry);
        self.highest_used = self.highest_used.max(slot);
        self.next_eviction = (slot + 1) % self.capacity;
        Ok(())
    }

    /// Finalize the current statement of a multi-statement text and prepare
    /// the next one. When both steps fail, the finalize error wins.
    pub fn next(
        &mut self,
        db: *mut sqlite3,
        entry: Box<CachedStatement>,
    ) -> CResult<Box<CachedStatement>> {
        debug_assert!(entry.has_more());
        let remainder: Arc<str> = Arc::from(&entry.full_text()[entry.query_size..]);
        let hash = if self.capacity == 0 || remainder.len() > MAX_CACHEABLE_BYTES {
            HASH_SENTINEL
        } else {
            query_hash(&remainder)
        };

        let prepared = self.prepare_fresh(db, remainder, hash);
        let finalized = self.finalize(db, entry);
        match (prepared, finalized) {
            (Ok(next), Ok(())) => Ok(next),
            (Ok(next), Err(err)) => {
                let _ = self.destroy(db, next);
                Err(err)
            }
            (Err(err), Ok(())) => Err(err),
            (Err(_), Err(err)) => Err(err),
        }
    }

    fn destroy(&mut self, db: *mut sqlite3, mut entry: Box<CachedStatement>) -> CResult<()> {
        let rc = match entry.stmt.take() {
            Some(stmt) => unsafe { sqlite3_finalize(stmt.as_ptr()) },
            None => SQLITE_OK,
        };
        entry.text = QueryText::Sqlite;
        entry.hash = HASH_SENTINEL;
        entry.utf8_size = 0;
        entry.query_size = 0;
        if self.free_shells.len() < MAX_FREE_SHELLS {
            self.free_shells.push(entry);
        }
        check("finalize", db, rc)
    }

    /// Drop every resident statement. Used when the connection closes.
    pub fn clear(&mut self, db: *mut sqlite3) {
        for i in 0..self.capacity {
            self.hashes[i] = HASH_SENTINEL;
            if let Some(entry) = self.slots[i].take() {
                let _ = self.destroy(db, entry);
            }
        }
    }
}
