//! Ticket type factory for creating test ticket type entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating ticket types with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::ticket_type::TicketTypeFactory;
///
/// let online = TicketTypeFactory::new(&db)
///     .remote(true)
///     .includes_hotel(false)
///     .price(100)
///     .build()
///     .await?;
/// ```
pub struct TicketTypeFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    price: i32,
    is_remote: bool,
    includes_hotel: bool,
}

impl<'a> TicketTypeFactory<'a> {
    /// Creates a new TicketTypeFactory with default values.
    ///
    /// Defaults describe a ticket that grants a hotel stay:
    /// - name: `"Ticket Type {id}"`
    /// - price: `600`
    /// - is_remote: `false`
    /// - includes_hotel: `true`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `TicketTypeFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Ticket Type {}", id),
            price: 600,
            is_remote: false,
            includes_hotel: true,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the price in minor currency units.
    pub fn price(mut self, price: i32) -> Self {
        self.price = price;
        self
    }

    pub fn remote(mut self, is_remote: bool) -> Self {
        self.is_remote = is_remote;
        self
    }

    pub fn includes_hotel(mut self, includes_hotel: bool) -> Self {
        self.includes_hotel = includes_hotel;
        self
    }

    /// Builds and inserts the ticket type entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::ticket_type::Model)` - Created ticket type
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::ticket_type::Model, DbErr> {
        let now = Utc::now();
        entity::ticket_type::ActiveModel {
            name: ActiveValue::Set(self.name),
            price: ActiveValue::Set(self.price),
            is_remote: ActiveValue::Set(self.is_remote),
            includes_hotel: ActiveValue::Set(self.includes_hotel),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an in-person ticket type that includes a hotel stay.
///
/// Shorthand for `TicketTypeFactory::new(db).build().await`.
pub async fn create_ticket_type(
    db: &DatabaseConnection,
) -> Result<entity::ticket_type::Model, DbErr> {
    TicketTypeFactory::new(db).build().await
}
