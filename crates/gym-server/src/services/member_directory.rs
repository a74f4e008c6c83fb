//! Member directory service
//!
//! Owns the transaction boundaries for member writes. Each write runs in its
//! own transaction, committed on success and rolled back on any failure.

use crate::storage::{members, Database};
use gym_types::{FormError, Member, MemberChanges, NewMember};
use sqlx::error::ErrorKind;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("Member id {0} is already in use")]
    DuplicateId(i64),

    #[error("Integrity violation: {0}")]
    Integrity(String),

    #[error("Invalid form: {0}")]
    InvalidForm(#[from] FormError),

    #[error("Member {0} not found")]
    NotFound(i64),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl DirectoryError {
    /// Whether the caller can recover by sending the user back to the form
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            DirectoryError::DuplicateId(_)
                | DirectoryError::Integrity(_)
                | DirectoryError::InvalidForm(_)
        )
    }

    /// Sort a storage error into duplicate id, other integrity violation, or
    /// plain database failure
    fn classify(err: sqlx::Error, id: i64) -> Self {
        let Some(db_err) = err.as_database_error() else {
            return DirectoryError::Database(err);
        };

        let message = db_err.message();
        if db_err.is_unique_violation() || message.contains("UNIQUE constraint failed") {
            return DirectoryError::DuplicateId(id);
        }

        match db_err.kind() {
            ErrorKind::CheckViolation
            | ErrorKind::NotNullViolation
            | ErrorKind::ForeignKeyViolation => DirectoryError::Integrity(message.to_string()),
            _ if message.contains("constraint failed") => {
                DirectoryError::Integrity(message.to_string())
            }
            _ => DirectoryError::Database(err),
        }
    }
}

pub type DirectoryResult<T> = Result<T, DirectoryError>;

pub struct MemberDirectory {
    db: Arc<Database>,
}

impl MemberDirectory {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> DirectoryResult<Vec<Member>> {
        let mut conn = self.db.acquire().await?;
        let all = members::fetch_all(&mut conn).await?;
        debug!("Listed {} members", all.len());
        Ok(all)
    }

    pub async fn get(&self, id: i64) -> DirectoryResult<Member> {
        let mut conn = self.db.acquire().await?;
        members::fetch(&mut conn, id)
            .await?
            .ok_or(DirectoryError::NotFound(id))
    }

    /// Persist a new member with the default status
    pub async fn register(&self, new_member: NewMember) -> DirectoryResult<Member> {
        let member = new_member.into_member();
        info!("Registering member: id={}, plan={}", member.id, member.plan);

        let mut tx = self.db.begin().await?;
        let inserted = members::insert(&mut tx, &member).await;
        if let Err(e) = inserted {
            let err = DirectoryError::classify(e, member.id);
            if let Err(rollback_err) = tx.rollback().await {
                warn!("Rollback failed for member {}: {}", member.id, rollback_err);
            }
            warn!("Registration rejected for member {}: {}", member.id, err);
            return Err(err);
        }
        tx.commit()
            .await
            .map_err(|e| DirectoryError::classify(e, member.id))?;

        Ok(member)
    }

    /// Overwrite all mutable fields of an existing member.
    ///
    /// The UPDATE is the first statement of the transaction so the write lock
    /// is taken before any read; concurrent edits queue on the busy timeout
    /// and the last one to commit wins.
    pub async fn update(&self, id: i64, changes: MemberChanges) -> DirectoryResult<Member> {
        let member = changes.into_member(id);
        let mut tx = self.db.begin().await?;

        let updated = members::update(&mut tx, &member).await;
        match updated {
            Ok(0) => return Err(DirectoryError::NotFound(id)),
            Ok(_) => {}
            Err(e) => {
                let err = DirectoryError::classify(e, id);
                if let Err(rollback_err) = tx.rollback().await {
                    warn!("Rollback failed for member {}: {}", id, rollback_err);
                }
                warn!("Update rejected for member {}: {}", id, err);
                return Err(err);
            }
        }

        let stored = members::fetch(&mut tx, id)
            .await?
            .ok_or(DirectoryError::NotFound(id))?;
        tx.commit()
            .await
            .map_err(|e| DirectoryError::classify(e, id))?;

        info!("Updated member {}: status={}", id, stored.status);
        Ok(stored)
    }

    pub async fn delete(&self, id: i64) -> DirectoryResult<()> {
        let mut tx = self.db.begin().await?;

        if members::delete(&mut tx, id).await? == 0 {
            return Err(DirectoryError::NotFound(id));
        }
        tx.commit().await?;

        info!("Deleted member {}", id);
        Ok(())
    }
}
