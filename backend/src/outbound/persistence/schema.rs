//! Diesel table definitions for the PostgreSQL schema.
//!
//! Must match `backend/migrations/` exactly; `diesel print-schema` against a
//! migrated database regenerates it.

diesel::table! {
    /// Employee records.
    ///
    /// `id` is a `BIGSERIAL`; upserts may also write explicit ids.
    employees (id) {
        id -> Int8,
        name -> Nullable<Varchar>,
        email -> Nullable<Varchar>,
        /// Not nullable; defaults to zero.
        age -> Int4,
        role -> Nullable<Varchar>,
        /// `NUMERIC(5,2)`.
        salary_hike -> Nullable<Numeric>,
        date_of_joining -> Nullable<Date>,
        is_active -> Nullable<Bool>,
    }
}
