//! Diesel row structs used by the persistence adapters.
//!
//! These types mirror the table definitions in `schema.rs` and never leave
//! this module tree; adapters convert them into validated domain types.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::{events, registrations, users};

/// Queryable row for events.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = events)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct EventRow {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub event_date: NaiveDate,
    pub event_time: NaiveTime,
    pub venue: String,
    pub capacity: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insertable row for events.
#[derive(Debug, Insertable)]
#[diesel(table_name = events)]
pub(crate) struct NewEventRow<'a> {
    pub id: Uuid,
    pub title: &'a str,
    pub description: &'a str,
    pub event_date: NaiveDate,
    pub event_time: NaiveTime,
    pub venue: &'a str,
    pub capacity: i32,
}

/// Changeset replacing an event's editable fields.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = events)]
pub(crate) struct EventChangeset<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub event_date: NaiveDate,
    pub event_time: NaiveTime,
    pub venue: &'a str,
    pub capacity: i32,
    pub updated_at: DateTime<Utc>,
}

/// Queryable row for registrations.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = registrations)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct RegistrationRow {
    pub id: Uuid,
    pub event_id: Uuid,
    pub name: String,
    pub email: String,
    pub branch: String,
    pub year: String,
    pub created_at: DateTime<Utc>,
}

/// Insertable row for registrations.
#[derive(Debug, Insertable)]
#[diesel(table_name = registrations)]
pub(crate) struct NewRegistrationRow<'a> {
    pub id: Uuid,
    pub event_id: Uuid,
    pub name: &'a str,
    pub email: &'a str,
    pub branch: &'a str,
    pub year: &'a str,
}

/// Queryable row for user accounts.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: Uuid,
    pub display_name: String,
    pub email: String,
    pub password_digest: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insertable row for user accounts.
#[derive(Debug, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub id: Uuid,
    pub display_name: &'a str,
    pub email: &'a str,
    pub password_digest: &'a str,
    pub role: &'a str,
}
