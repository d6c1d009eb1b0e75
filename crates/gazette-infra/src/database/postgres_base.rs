use std::marker::PhantomData;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DbConn, EntityTrait, IntoActiveModel, PrimaryKeyTrait,
};

use gazette_core::error::RepoError;
use gazette_core::ports::BaseRepository;

/// Generic PostgreSQL repository implementation.
///
/// `A` is the entity's active model; it has to be carried as a separate
/// parameter because `EntityTrait` does not name it.
pub struct PostgresBaseRepository<E, A>
where
    E: EntityTrait,
{
    pub(crate) db: DbConn,
    _entity: PhantomData<(E, A)>,
}

impl<E, A> PostgresBaseRepository<E, A>
where
    E: EntityTrait,
{
    pub fn new(db: DbConn) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }
}

#[async_trait]
impl<E, A, T, ID> BaseRepository<T, ID> for PostgresBaseRepository<E, A>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<A> + Sync + Send,
    A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + Sync + 'static,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = ID>,
    ID: Send + Sync + Into<sea_orm::Value> + Clone + Copy + 'static,
    T: From<E::Model> + Into<A> + Send + Sync + 'static,
{
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError> {
        let result = E::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.map(Into::into))
    }

    async fn insert(&self, entity: T) -> Result<T, RepoError> {
        // Ids are assigned by the caller, so the primary key arrives
        // already set; `save` would turn that into an UPDATE.
        let active_model: A = entity.into();
        let model = active_model.insert(&self.db).await.map_err(|e| {
            let err_str = e.to_string();
            if err_str.contains("duplicate") || err_str.contains("unique") {
                RepoError::Constraint("Entity already exists".to_string())
            } else {
                RepoError::Query(err_str)
            }
        })?;

        Ok(model.into())
    }
}
