//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the database migrations exactly. They are
//! used by Diesel for compile-time query validation and type-safe SQL
//! generation. When migrations change the schema, regenerate this file with
//! `diesel print-schema` or update it by hand.

diesel::table! {
    /// User accounts.
    ///
    /// `email` carries a unique index; `role` is constrained to
    /// `attendee` or `admin`.
    users (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Human-readable display name.
        display_name -> Varchar,
        /// Login email, unique across accounts.
        email -> Varchar,
        /// Salted credential digest.
        password_digest -> Varchar,
        /// Account role: `attendee` or `admin`.
        role -> Varchar,
        /// Record creation timestamp.
        created_at -> Timestamptz,
        /// Last modification timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Event listings.
    events (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Event title shown in listings.
        title -> Varchar,
        /// Longer event description.
        description -> Text,
        /// Calendar date of the event.
        event_date -> Date,
        /// Start time of the event.
        event_time -> Time,
        /// Venue the event takes place at.
        venue -> Varchar,
        /// Maximum number of registrations, at least 1.
        capacity -> Int4,
        /// Record creation timestamp.
        created_at -> Timestamptz,
        /// Last modification timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Attendee registrations.
    ///
    /// `(event_id, email)` carries a unique index backing duplicate
    /// detection; rows cascade away with their event.
    registrations (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Event the registration belongs to.
        event_id -> Uuid,
        /// Attendee display name.
        name -> Varchar,
        /// Attendee email, unique per event.
        email -> Varchar,
        /// Branch or department.
        branch -> Varchar,
        /// Year of study.
        year -> Varchar,
        /// Record creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::joinable!(registrations -> events (event_id));

diesel::allow_tables_to_appear_in_same_query!(events, registrations, users);
