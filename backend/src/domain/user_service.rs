//! User CRUD domain service.
//!
//! Sequences validation then persistence for each operation. The service
//! performs no checks of its own and returns collaborator errors unchanged;
//! a validated payload is only narrowed from `Option` before it is stored.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{UserRepository, UserService, UserValidator};
use crate::domain::{User, UserDraft, UserError, UserId};

/// [`UserService`] implementation over a validator and a repository.
#[derive(Clone)]
pub struct UserServiceImpl<V, R> {
    validator: Arc<V>,
    repository: Arc<R>,
}

impl<V, R> UserServiceImpl<V, R> {
    /// Create a new service with the given collaborators.
    pub fn new(validator: Arc<V>, repository: Arc<R>) -> Self {
        Self {
            validator,
            repository,
        }
    }
}

/// Unwrap a payload the validator has accepted.
///
/// The validator rejects a nil user first, so `None` only arrives here from
/// a validator that breaks that contract.
fn validated(user: Option<UserDraft>) -> Result<UserDraft, UserError> {
    user.ok_or(UserError::NilInput)
}

fn log_rejection(operation: &'static str, error: &UserError) {
    if error.is_client_error() {
        debug!(operation, %error, "user mutation rejected");
    }
}

#[async_trait]
impl<V, R> UserService for UserServiceImpl<V, R>
where
    V: UserValidator,
    R: UserRepository,
{
    async fn list(&self) -> Result<Vec<User>, UserError> {
        Ok(self.repository.list().await?)
    }

    async fn create(&self, user: Option<UserDraft>) -> Result<User, UserError> {
        self.validator
            .validate_for_create(user.as_ref())
            .await
            .inspect_err(|err| log_rejection("create", err))?;
        let draft = validated(user)?;
        Ok(self.repository.create(&draft).await?)
    }

    async fn update(&self, user: Option<UserDraft>, id: UserId) -> Result<(), UserError> {
        self.validator
            .validate_for_update(user.as_ref(), id)
            .await
            .inspect_err(|err| log_rejection("update", err))?;
        let draft = validated(user)?;
        Ok(self.repository.update(&draft, id).await?)
    }

    async fn delete(&self, id: UserId) -> Result<(), UserError> {
        self.validator
            .validate_for_delete(id)
            .await
            .inspect_err(|err| log_rejection("delete", err))?;
        Ok(self.repository.delete(id).await?)
    }
}

#[cfg(test)]
mod tests {
    //! Orchestration order and error propagation.
    //!
    //! The validator is a scripted double so these tests observe only the
    //! sequencing. Rule coverage lives with the default validator.

    use std::sync::Mutex;

    use super::*;
    use crate::domain::ports::{MockUserRepository, UserPersistenceError};
    use chrono::Utc;
    use rstest::rstest;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum ValidatorCall {
        Create(Option<UserDraft>),
        Update(Option<UserDraft>, UserId),
        Delete(UserId),
    }

    /// Records every call and answers with a fixed outcome.
    struct ScriptedValidator {
        outcome: Result<(), UserError>,
        calls: Mutex<Vec<ValidatorCall>>,
    }

    impl ScriptedValidator {
        fn passing() -> Self {
            Self::answering(Ok(()))
        }

        fn failing(error: UserError) -> Self {
            Self::answering(Err(error))
        }

        fn answering(outcome: Result<(), UserError>) -> Self {
            Self {
                outcome,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn record(&self, call: ValidatorCall) -> Result<(), UserError> {
            self.calls
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner)
                .push(call);
            self.outcome.clone()
        }

        fn calls(&self) -> Vec<ValidatorCall> {
            self.calls
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner)
                .clone()
        }
    }

    #[async_trait]
    impl UserValidator for ScriptedValidator {
        async fn validate_for_create(&self, user: Option<&UserDraft>) -> Result<(), UserError> {
            self.record(ValidatorCall::Create(user.cloned()))
        }

        async fn validate_for_update(
            &self,
            user: Option<&UserDraft>,
            id: UserId,
        ) -> Result<(), UserError> {
            self.record(ValidatorCall::Update(user.cloned(), id))
        }

        async fn validate_for_delete(&self, id: UserId) -> Result<(), UserError> {
            self.record(ValidatorCall::Delete(id))
        }
    }

    type TestService = UserServiceImpl<ScriptedValidator, MockUserRepository>;

    fn make_service(
        validator: ScriptedValidator,
        repo: MockUserRepository,
    ) -> (TestService, Arc<ScriptedValidator>) {
        let validator = Arc::new(validator);
        (
            UserServiceImpl::new(Arc::clone(&validator), Arc::new(repo)),
            validator,
        )
    }

    fn stored(id: i64, name: &str, age: i32) -> User {
        let now = Utc::now();
        User {
            id: UserId::new(id),
            name: name.to_owned(),
            age,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    #[tokio::test]
    async fn list_returns_repository_users() {
        let users = vec![stored(1, "John", 10), stored(2, "Jane", 10)];
        let expected = users.clone();
        let mut repo = MockUserRepository::new();
        repo.expect_list().times(1).return_once(move || Ok(users));

        let (service, validator) = make_service(ScriptedValidator::passing(), repo);

        let listed = service.list().await.expect("list succeeds");
        assert_eq!(listed, expected);
        assert!(validator.calls().is_empty());
    }

    #[tokio::test]
    async fn list_treats_empty_table_as_success() {
        let mut repo = MockUserRepository::new();
        repo.expect_list().times(1).return_once(|| Ok(Vec::new()));

        let (service, _) = make_service(ScriptedValidator::passing(), repo);

        let listed = service.list().await.expect("empty list is not an error");
        assert!(listed.is_empty());
    }

    #[tokio::test]
    async fn list_propagates_storage_errors() {
        let mut repo = MockUserRepository::new();
        repo.expect_list()
            .times(1)
            .return_once(|| Err(UserPersistenceError::query("database error")));

        let (service, _) = make_service(ScriptedValidator::passing(), repo);

        let err = service.list().await.expect_err("storage failure");
        assert_eq!(
            err,
            UserError::Storage(UserPersistenceError::query("database error"))
        );
    }

    #[tokio::test]
    async fn create_persists_validated_user() {
        let draft = UserDraft::new("John", 10);
        let mut repo = MockUserRepository::new();
        repo.expect_create()
            .withf(|draft: &UserDraft| draft.name == "John" && draft.age == 10)
            .times(1)
            .return_once(|_| Ok(stored(1, "John", 10)));

        let (service, validator) = make_service(ScriptedValidator::passing(), repo);

        let user = service.create(Some(draft.clone())).await.expect("created");
        assert!(user.id.as_i64() > 0);
        assert_eq!(user.name, "John");
        assert_eq!(user.age, 10);
        assert_eq!(validator.calls(), vec![ValidatorCall::Create(Some(draft))]);
    }

    #[rstest]
    #[case(None, UserError::NilInput)]
    #[case(Some(UserDraft::new("", 10)), UserError::NameRequired)]
    #[case(Some(UserDraft::new("J", 10)), UserError::name_too_short())]
    #[case(Some(UserDraft::new("J".repeat(101), 10)), UserError::name_too_long())]
    #[case(Some(UserDraft::new("John", 0)), UserError::AgeNotPositive)]
    #[case(Some(UserDraft::new("John", 151)), UserError::age_unrealistic())]
    #[tokio::test]
    async fn create_stops_at_validation_failure(
        #[case] draft: Option<UserDraft>,
        #[case] error: UserError,
    ) {
        let mut repo = MockUserRepository::new();
        repo.expect_create().times(0);

        let (service, _) = make_service(ScriptedValidator::failing(error.clone()), repo);

        let err = service.create(draft).await.expect_err("rejected");
        assert_eq!(err, error);
    }

    #[tokio::test]
    async fn nil_user_never_reaches_storage_even_if_validator_passes_it() {
        let mut repo = MockUserRepository::new();
        repo.expect_create().times(0);
        repo.expect_update().times(0);

        let (service, validator) = make_service(ScriptedValidator::passing(), repo);

        assert_eq!(service.create(None).await, Err(UserError::NilInput));
        assert_eq!(
            service.update(None, UserId::new(1)).await,
            Err(UserError::NilInput)
        );
        assert_eq!(
            validator.calls(),
            vec![
                ValidatorCall::Create(None),
                ValidatorCall::Update(None, UserId::new(1))
            ]
        );
    }

    #[tokio::test]
    async fn create_propagates_storage_errors() {
        let mut repo = MockUserRepository::new();
        repo.expect_create()
            .times(1)
            .return_once(|_| Err(UserPersistenceError::query("database error")));

        let (service, _) = make_service(ScriptedValidator::passing(), repo);

        let err = service
            .create(Some(UserDraft::new("John", 10)))
            .await
            .expect_err("storage failure");
        assert!(matches!(err, UserError::Storage(_)));
    }

    #[tokio::test]
    async fn update_addresses_the_path_identifier() {
        let mut repo = MockUserRepository::new();
        repo.expect_update()
            .withf(|draft: &UserDraft, id: &UserId| draft.name == "Jane" && id.as_i64() == 1)
            .times(1)
            .return_once(|_, _| Ok(()));

        let (service, validator) = make_service(ScriptedValidator::passing(), repo);

        service
            .update(Some(UserDraft::new("Jane", 20)), UserId::new(1))
            .await
            .expect("updated");
        assert_eq!(
            validator.calls(),
            vec![ValidatorCall::Update(
                Some(UserDraft::new("Jane", 20)),
                UserId::new(1)
            )]
        );
    }

    #[rstest]
    #[case(UserError::NilInput)]
    #[case(UserError::NameRequired)]
    #[case(UserError::AgeNotPositive)]
    #[case(UserError::not_found(UserId::new(999)))]
    #[case(UserError::Storage(UserPersistenceError::query("database error")))]
    #[tokio::test]
    async fn update_skips_persistence_when_validation_fails(#[case] error: UserError) {
        let mut repo = MockUserRepository::new();
        repo.expect_update().times(0);

        let (service, _) = make_service(ScriptedValidator::failing(error.clone()), repo);

        let err = service
            .update(Some(UserDraft::new("Jane", 20)), UserId::new(999))
            .await
            .expect_err("rejected");
        assert_eq!(err, error);
    }

    #[tokio::test]
    async fn update_propagates_storage_errors() {
        let mut repo = MockUserRepository::new();
        repo.expect_update()
            .times(1)
            .return_once(|_, _| Err(UserPersistenceError::connection("refused")));

        let (service, _) = make_service(ScriptedValidator::passing(), repo);

        let err = service
            .update(Some(UserDraft::new("Jane", 20)), UserId::new(1))
            .await
            .expect_err("storage failure");
        assert_eq!(
            err,
            UserError::Storage(UserPersistenceError::connection("refused"))
        );
    }

    #[tokio::test]
    async fn delete_soft_deletes_after_existence_check() {
        let mut repo = MockUserRepository::new();
        repo.expect_delete()
            .withf(|id: &UserId| id.as_i64() == 1)
            .times(1)
            .return_once(|_| Ok(()));

        let (service, validator) = make_service(ScriptedValidator::passing(), repo);

        service.delete(UserId::new(1)).await.expect("deleted");
        assert_eq!(validator.calls(), vec![ValidatorCall::Delete(UserId::new(1))]);
    }

    #[rstest]
    #[case(UserError::not_found(UserId::new(1)))]
    #[case(UserError::Storage(UserPersistenceError::query("database error")))]
    #[tokio::test]
    async fn delete_skips_persistence_when_validation_fails(#[case] error: UserError) {
        let mut repo = MockUserRepository::new();
        repo.expect_delete().times(0);

        let (service, _) = make_service(ScriptedValidator::failing(error.clone()), repo);

        let err = service
            .delete(UserId::new(1))
            .await
            .expect_err("rejected");
        assert_eq!(err, error);
    }

    #[tokio::test]
    async fn delete_propagates_storage_errors() {
        let mut repo = MockUserRepository::new();
        repo.expect_delete()
            .times(1)
            .return_once(|_| Err(UserPersistenceError::query("database error")));

        let (service, _) = make_service(ScriptedValidator::passing(), repo);

        let err = service
            .delete(UserId::new(1))
            .await
            .expect_err("storage failure");
        assert!(matches!(err, UserError::Storage(_)));
    }
}
