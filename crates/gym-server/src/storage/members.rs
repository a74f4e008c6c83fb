//! Member table queries
//!
//! Every function runs on a caller-provided connection so the service decides
//! the transaction boundaries.

use gym_types::Member;
use sqlx::SqliteConnection;

pub async fn insert(conn: &mut SqliteConnection, member: &Member) -> sqlx::Result<()> {
    sqlx::query(
        r#"
        INSERT INTO members (id, name, email, phone, age, gender, plan, notes, status)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
        "#,
    )
    .bind(member.id)
    .bind(&member.name)
    .bind(&member.email)
    .bind(member.phone)
    .bind(member.age)
    .bind(&member.gender)
    .bind(&member.plan)
    .bind(&member.notes)
    .bind(&member.status)
    .execute(conn)
    .await?;

    Ok(())
}

pub async fn fetch_all(conn: &mut SqliteConnection) -> sqlx::Result<Vec<Member>> {
    let rows: Vec<MemberRow> = sqlx::query_as(
        r#"
        SELECT id, name, email, phone, age, gender, plan, notes, status
        FROM members
        "#,
    )
    .fetch_all(conn)
    .await?;

    Ok(rows.into_iter().map(|r| r.into()).collect())
}

pub async fn fetch(conn: &mut SqliteConnection, id: i64) -> sqlx::Result<Option<Member>> {
    let row: Option<MemberRow> = sqlx::query_as(
        r#"
        SELECT id, name, email, phone, age, gender, plan, notes, status
        FROM members WHERE id = ?1
        "#,
    )
    .bind(id)
    .fetch_optional(conn)
    .await?;

    Ok(row.map(|r| r.into()))
}

/// Rewrite every mutable column. Returns the number of rows touched.
pub async fn update(conn: &mut SqliteConnection, member: &Member) -> sqlx::Result<u64> {
    let result = sqlx::query(
        r#"
        UPDATE members
        SET name = ?1, email = ?2, phone = ?3, age = ?4,
            gender = ?5, plan = ?6, notes = ?7, status = ?8
        WHERE id = ?9
        "#,
    )
    .bind(&member.name)
    .bind(&member.email)
    .bind(member.phone)
    .bind(member.age)
    .bind(&member.gender)
    .bind(&member.plan)
    .bind(&member.notes)
    .bind(&member.status)
    .bind(member.id)
    .execute(conn)
    .await?;

    Ok(result.rows_affected())
}

pub async fn delete(conn: &mut SqliteConnection, id: i64) -> sqlx::Result<u64> {
    let result = sqlx::query(
        r#"
        DELETE FROM members WHERE id = ?1
        "#,
    )
    .bind(id)
    .execute(conn)
    .await?;

    Ok(result.rows_affected())
}

// Helper struct for sqlx query_as
#[derive(sqlx::FromRow)]
struct MemberRow {
    id: i64,
    name: String,
    email: Option<String>,
    phone: i64,
    age: i64,
    gender: String,
    plan: String,
    notes: Option<String>,
    status: String,
}

impl From<MemberRow> for Member {
    fn from(r: MemberRow) -> Self {
        Member {
            id: r.id,
            name: r.name,
            email: r.email,
            phone: r.phone,
            age: r.age,
            gender: r.gender,
            plan: r.plan,
            notes: r.notes,
            status: r.status,
        }
    }
}
