//! Order (service request) management and reporting

use std::sync::Arc;

use chrono::{Datelike, Utc};
use tracing::info;
use validator::Validate;

use crate::domain::{
    collect_violations, CommunityRepositoryInterface, DomainError, DomainResult, FieldViolation,
    InhabitantRepositoryInterface, NewOrder, Order, OrderRepositoryInterface, OrderStatus,
    UserRepositoryInterface,
};
use crate::shared::format_br_date;

/// Sentinel for report columns whose soft reference no longer resolves.
const UNKNOWN: &str = "Unknown";

#[derive(Debug, Default)]
pub struct CreateOrderInput {
    pub content: Option<String>,
    pub user_id: Option<String>,
    pub inhabitant_id: Option<String>,
}

/// Partial update: absent fields keep their stored value. The status
/// arrives as its wire string and is parsed strictly.
#[derive(Debug, Default)]
pub struct UpdateOrderInput {
    pub content: Option<String>,
    pub status: Option<String>,
}

/// Row of the processed-orders report: order fields joined with the
/// requesting caseworker and the beneficiary, dates as `DD/MM/YYYY`.
#[derive(Debug)]
pub struct ProcessedOrder {
    pub id: String,
    pub content: String,
    pub status: OrderStatus,
    pub user_name: String,
    pub user_role: String,
    pub inhabitant_name: String,
    pub inhabitant_cpf: String,
    pub date: String,
    pub date_update: String,
}

/// Row of the orders-by-community projection.
#[derive(Debug, PartialEq, Eq)]
pub struct CommunityOrderRow {
    pub community: String,
    pub date: String,
}

pub struct OrderService<O, U, I, C>
where
    O: OrderRepositoryInterface,
    U: UserRepositoryInterface,
    I: InhabitantRepositoryInterface,
    C: CommunityRepositoryInterface,
{
    orders: Arc<O>,
    users: Arc<U>,
    inhabitants: Arc<I>,
    communities: Arc<C>,
}

impl<O, U, I, C> OrderService<O, U, I, C>
where
    O: OrderRepositoryInterface,
    U: UserRepositoryInterface,
    I: InhabitantRepositoryInterface,
    C: CommunityRepositoryInterface,
{
    pub fn new(orders: Arc<O>, users: Arc<U>, inhabitants: Arc<I>, communities: Arc<C>) -> Self {
        Self {
            orders,
            users,
            inhabitants,
            communities,
        }
    }

    /// Create an order. The requesting user and the target inhabitant must
    /// both exist at creation time; afterwards the references are soft.
    pub async fn create_order(&self, input: CreateOrderInput) -> DomainResult<Order> {
        let content = input.content.unwrap_or_default();
        let user_id = input.user_id.unwrap_or_default();
        let inhabitant_id = input.inhabitant_id.unwrap_or_default();

        if content.is_empty() || user_id.is_empty() || inhabitant_id.is_empty() {
            return Err(DomainError::Precondition(
                "Content, userID and inhabitantID are required".into(),
            ));
        }

        let candidate = NewOrder {
            content,
            user_id,
            inhabitant_id,
        };
        if let Err(errors) = candidate.validate() {
            return Err(DomainError::Validation(collect_violations(&errors)));
        }

        if self.users.find_by_id(&candidate.user_id).await?.is_none() {
            return Err(DomainError::ReferenceNotFound { entity: "User" });
        }
        if self
            .inhabitants
            .find_by_id(&candidate.inhabitant_id)
            .await?
            .is_none()
        {
            return Err(DomainError::ReferenceNotFound {
                entity: "Inhabitant",
            });
        }

        let now = Utc::now();
        let order = Order {
            id: uuid::Uuid::new_v4().to_string(),
            content: candidate.content,
            user_id: candidate.user_id,
            inhabitant_id: candidate.inhabitant_id,
            status: OrderStatus::Pending,
            date: now,
            date_update: now,
        };
        self.orders.insert(order.clone()).await?;

        info!(order_id = %order.id, "Order created");
        Ok(order)
    }

    pub async fn list_orders(&self) -> DomainResult<Vec<Order>> {
        self.orders.list().await
    }

    pub async fn get_by_id(&self, id: &str) -> DomainResult<Order> {
        self.orders
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound { entity: "Order" })
    }

    /// Update content and/or status. Any status may follow any other; an
    /// unrecognized status string is a constraint violation, never coerced.
    pub async fn update_order(&self, id: &str, input: UpdateOrderInput) -> DomainResult<Order> {
        let Some(mut order) = self.orders.find_by_id(id).await? else {
            return Err(DomainError::NotFound { entity: "Order" });
        };

        if let Some(content) = input.content {
            let candidate = NewOrder {
                content,
                user_id: order.user_id.clone(),
                inhabitant_id: order.inhabitant_id.clone(),
            };
            if let Err(errors) = candidate.validate() {
                return Err(DomainError::Validation(collect_violations(&errors)));
            }
            order.content = candidate.content;
        }

        if let Some(status) = input.status {
            match OrderStatus::parse(&status) {
                Some(status) => order.status = status,
                None => {
                    return Err(DomainError::Validation(vec![FieldViolation {
                        property: "status".into(),
                        constraints: vec![
                            "status must be one of Pendente, Negado, Atendido".into(),
                        ],
                    }]))
                }
            }
        }

        order.date_update = Utc::now();
        self.orders.update(&order).await?;

        Ok(order)
    }

    pub async fn delete_order(&self, id: &str) -> DomainResult<()> {
        let Some(order) = self.orders.find_by_id(id).await? else {
            return Err(DomainError::NotFound { entity: "Order" });
        };

        self.orders.delete(&order.id).await?;
        info!(order_id = %order.id, "Order deleted");
        Ok(())
    }

    // ── Reporting ───────────────────────────────────────────────

    /// Every order joined with the caseworker (name, role) and the
    /// beneficiary (name, CPF). Dangling references render as `Unknown`.
    pub async fn get_all_orders_processed(&self) -> DomainResult<Vec<ProcessedOrder>> {
        let orders = self.orders.list().await?;

        let mut rows = Vec::with_capacity(orders.len());
        for order in orders {
            let (user_name, user_role) = match self.users.find_by_id(&order.user_id).await? {
                Some(user) => (user.name, user.role.as_str().to_string()),
                None => (UNKNOWN.to_string(), UNKNOWN.to_string()),
            };
            let (inhabitant_name, inhabitant_cpf) =
                match self.inhabitants.find_by_id(&order.inhabitant_id).await? {
                    Some(inhabitant) => (inhabitant.name, inhabitant.cpf),
                    None => (UNKNOWN.to_string(), UNKNOWN.to_string()),
                };

            rows.push(ProcessedOrder {
                id: order.id,
                content: order.content,
                status: order.status,
                user_name,
                user_role,
                inhabitant_name,
                inhabitant_cpf,
                date: format_br_date(&order.date),
                date_update: format_br_date(&order.date_update),
            });
        }
        Ok(rows)
    }

    /// Orders created in the current calendar year, projected to the
    /// community of each order's beneficiary plus the creation date.
    pub async fn get_orders_with_community(&self) -> DomainResult<Vec<CommunityOrderRow>> {
        let current_year = Utc::now().year();
        let orders = self.orders.list().await?;

        let mut rows = Vec::new();
        for order in orders {
            if order.date.year() != current_year {
                continue;
            }

            let community = match self.inhabitants.find_by_id(&order.inhabitant_id).await? {
                Some(inhabitant) => self
                    .communities
                    .find_by_id(&inhabitant.community_id)
                    .await?
                    .map(|c| c.name)
                    .unwrap_or_else(|| UNKNOWN.to_string()),
                None => UNKNOWN.to_string(),
            };

            rows.push(CommunityOrderRow {
                community,
                date: format_br_date(&order.date),
            });
        }
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::inhabitant::CreateInhabitantInput;
    use crate::application::services::test_support::{
        community_service, inhabitant_service, order_service, test_db, user_service,
    };
    use crate::application::services::user::CreateUserInput;
    use crate::domain::DomainError;
    use chrono::TimeZone;

    async fn seed(db: &sea_orm::DatabaseConnection) -> (String, String) {
        let users = user_service(db);
        let communities = community_service(db);
        let inhabitants = inhabitant_service(db);

        let user = users
            .create_user(CreateUserInput {
                name: Some("Ana Caseworker".into()),
                email: Some("ana@city.gov".into()),
                password: Some("secret1".into()),
                user_type: Some("Bolsa Família".into()),
            })
            .await
            .unwrap();
        let community = communities.create_community(Some("Centro".into())).await.unwrap();
        let inhabitant = inhabitants
            .create_inhabitant(CreateInhabitantInput {
                name: Some("Maria da Silva".into()),
                cpf: Some("52998224725".into()),
                phone: None,
                street: Some("Rua das Flores".into()),
                number: Some("42".into()),
                community_id: Some(community.id),
            })
            .await
            .unwrap();
        (user.id, inhabitant.id)
    }

    fn input(user_id: &str, inhabitant_id: &str, content: &str) -> CreateOrderInput {
        CreateOrderInput {
            content: Some(content.into()),
            user_id: Some(user_id.into()),
            inhabitant_id: Some(inhabitant_id.into()),
        }
    }

    #[tokio::test]
    async fn create_starts_pending_with_matching_timestamps() {
        let db = test_db().await;
        let (user_id, inhabitant_id) = seed(&db).await;
        let service = order_service(&db);

        let order = service
            .create_order(input(&user_id, &inhabitant_id, "Cesta básica"))
            .await
            .unwrap();
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.date, order.date_update);
    }

    #[tokio::test]
    async fn oversized_content_is_rejected_and_not_persisted() {
        let db = test_db().await;
        let (user_id, inhabitant_id) = seed(&db).await;
        let service = order_service(&db);

        let err = service
            .create_order(input(&user_id, &inhabitant_id, &"x".repeat(256)))
            .await
            .unwrap_err();
        match err {
            DomainError::Validation(violations) => {
                assert_eq!(violations[0].property, "content");
            }
            other => panic!("expected validation error, got {:?}", other),
        }
        assert!(service.list_orders().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn dangling_user_reference_is_rejected() {
        let db = test_db().await;
        let (_, inhabitant_id) = seed(&db).await;
        let service = order_service(&db);

        let err = service
            .create_order(input("no-such-user", &inhabitant_id, "Cesta básica"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::ReferenceNotFound { entity: "User" }));
        assert!(service.list_orders().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn unknown_status_is_a_violation_not_a_default() {
        let db = test_db().await;
        let (user_id, inhabitant_id) = seed(&db).await;
        let service = order_service(&db);

        let order = service
            .create_order(input(&user_id, &inhabitant_id, "Cesta básica"))
            .await
            .unwrap();

        let err = service
            .update_order(
                &order.id,
                UpdateOrderInput {
                    content: None,
                    status: Some("Approved".into()),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        // The stored record is untouched.
        assert_eq!(service.get_by_id(&order.id).await.unwrap().status, OrderStatus::Pending);
    }

    #[tokio::test]
    async fn update_refreshes_date_update_only() {
        let db = test_db().await;
        let (user_id, inhabitant_id) = seed(&db).await;
        let service = order_service(&db);

        let order = service
            .create_order(input(&user_id, &inhabitant_id, "Cesta básica"))
            .await
            .unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;

        let updated = service
            .update_order(
                &order.id,
                UpdateOrderInput {
                    content: None,
                    status: Some("Atendido".into()),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.status, OrderStatus::Attended);
        assert_eq!(updated.date, order.date);
        assert!(updated.date_update > order.date_update);
    }

    #[tokio::test]
    async fn processed_report_joins_user_and_inhabitant() {
        let db = test_db().await;
        let (user_id, inhabitant_id) = seed(&db).await;
        let service = order_service(&db);

        service
            .create_order(input(&user_id, &inhabitant_id, "Cesta básica"))
            .await
            .unwrap();

        let rows = service.get_all_orders_processed().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].user_name, "Ana Caseworker");
        assert_eq!(rows[0].user_role, "Bolsa Família");
        assert_eq!(rows[0].inhabitant_name, "Maria da Silva");
        assert_eq!(rows[0].inhabitant_cpf, "52998224725");
        assert_eq!(rows[0].date, format_br_date(&Utc::now()));
    }

    #[tokio::test]
    async fn community_report_only_covers_the_current_year() {
        let db = test_db().await;
        let (user_id, inhabitant_id) = seed(&db).await;
        let service = order_service(&db);

        service
            .create_order(input(&user_id, &inhabitant_id, "Cesta básica"))
            .await
            .unwrap();

        // Backdate a second order to last year, below the service layer.
        let last_year = Utc
            .with_ymd_and_hms(Utc::now().year() - 1, 6, 15, 12, 0, 0)
            .unwrap();
        let repo =
            crate::infrastructure::database::repositories::OrderRepository::new(db.clone());
        crate::domain::OrderRepositoryInterface::insert(
            &repo,
            Order {
                id: uuid::Uuid::new_v4().to_string(),
                content: "Pedido antigo".into(),
                user_id: user_id.clone(),
                inhabitant_id: inhabitant_id.clone(),
                status: OrderStatus::Attended,
                date: last_year,
                date_update: last_year,
            },
        )
        .await
        .unwrap();

        let rows = service.get_orders_with_community().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].community, "Centro");
        assert_eq!(rows[0].date, format_br_date(&Utc::now()));
    }
}
