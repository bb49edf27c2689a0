use actor_framework::{ActorEntity, FrameworkError, ResourceActor, ResourceClient};
use async_trait::async_trait;

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Account {
    id: u32,
    login: String,
    balance: i64,
}

#[derive(Debug)]
struct AccountCreate {
    login: String,
    balance: i64,
}

#[derive(Debug)]
struct AccountUpdate {
    login: Option<String>,
    balance: Option<i64>,
}

#[derive(Debug)]
enum AccountAction {
    Withdraw(i64),
}

#[derive(Debug, thiserror::Error, PartialEq)]
enum AccountError {
    #[error("login must not be empty")]
    EmptyLogin,
    #[error("balance would go negative")]
    Overdrawn,
}

#[async_trait]
impl ActorEntity for Account {
    type Id = u32;
    type Create = AccountCreate;
    type Update = AccountUpdate;
    type Action = AccountAction;
    type ActionResult = i64;
    type Context = ();
    type Error = AccountError;

    fn from_create_params(id: u32, params: AccountCreate) -> Result<Self, Self::Error> {
        if params.login.is_empty() {
            return Err(AccountError::EmptyLogin);
        }
        Ok(Self {
            id,
            login: params.login,
            balance: params.balance,
        })
    }

    fn unique_key(&self) -> Option<&str> {
        Some(&self.login)
    }

    async fn on_update(&mut self, update: AccountUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(balance) = update.balance {
            self.balance = balance;
        }
        if let Some(login) = update.login {
            if login.is_empty() {
                return Err(AccountError::EmptyLogin);
            }
            self.login = login;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: AccountAction,
        _ctx: &(),
    ) -> Result<i64, Self::Error> {
        match action {
            AccountAction::Withdraw(amount) => {
                if amount > self.balance {
                    return Err(AccountError::Overdrawn);
                }
                self.balance -= amount;
                Ok(self.balance)
            }
        }
    }
}

fn start() -> ResourceClient<Account> {
    let (actor, client) = ResourceActor::new(10);
    tokio::spawn(actor.run(()));
    client
}

fn account(login: &str, balance: i64) -> AccountCreate {
    AccountCreate {
        login: login.to_string(),
        balance,
    }
}

// --- Tests ---

#[tokio::test]
async fn test_framework_full_lifecycle() {
    let client = start();

    let id = client.create(account("alice", 10)).await.unwrap();
    assert_eq!(id, 1); // First ID should be 1

    let remaining = client
        .perform_action(id, AccountAction::Withdraw(4))
        .await
        .unwrap();
    assert_eq!(remaining, 6);

    let update = AccountUpdate {
        login: Some("alicia".into()),
        balance: None,
    };
    let updated = client.update(id, update).await.unwrap();
    assert_eq!(updated.login, "alicia");
    assert_eq!(updated.balance, 6);

    client.delete(id).await.unwrap();
    assert!(client.get(id).await.unwrap().is_none());
    assert!(matches!(
        client.delete(id).await,
        Err(FrameworkError::NotFound(missing)) if missing == "1"
    ));
}

#[tokio::test]
async fn test_ids_are_monotonic_and_never_reused() {
    let client = start();

    let first = client.create(account("a", 0)).await.unwrap();
    let second = client.create(account("b", 0)).await.unwrap();
    client.delete(second).await.unwrap();
    let third = client.create(account("c", 0)).await.unwrap();

    assert_eq!((first, second, third), (1, 2, 3));
    let logins: Vec<_> = client
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|a| a.login)
        .collect();
    assert_eq!(logins, vec!["a", "c"]);
}

#[tokio::test]
async fn test_unique_key_conflict_and_lookup() {
    let client = start();

    client.create(account("alice", 1)).await.unwrap();
    let duplicate = client.create(account("alice", 2)).await;
    assert!(matches!(duplicate, Err(FrameworkError::Conflict(key)) if key == "alice"));

    let found = client.find_by_key("alice").await.unwrap().unwrap();
    assert_eq!(found.balance, 1);
    assert!(client.find_by_key("bob").await.unwrap().is_none());
    assert_eq!(client.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_key_is_released_on_delete_and_rename() {
    let client = start();

    let id = client.create(account("alice", 0)).await.unwrap();
    client
        .update(
            id,
            AccountUpdate {
                login: Some("al".into()),
                balance: None,
            },
        )
        .await
        .unwrap();
    assert!(client.find_by_key("alice").await.unwrap().is_none());

    let other = client.create(account("alice", 5)).await.unwrap();
    client.delete(other).await.unwrap();
    client.create(account("alice", 7)).await.unwrap();
}

#[tokio::test]
async fn test_batch_is_all_or_nothing() {
    let client = start();
    client.create(account("taken", 0)).await.unwrap();

    let invalid = client
        .create_many(vec![account("x", 1), account("", 2)])
        .await;
    assert!(matches!(
        invalid.unwrap_err().downcast_entity::<AccountError>(),
        Ok(AccountError::EmptyLogin)
    ));

    let conflicting = client
        .create_many(vec![account("y", 1), account("taken", 2)])
        .await;
    assert!(matches!(conflicting, Err(FrameworkError::Conflict(_))));

    let within_batch = client
        .create_many(vec![account("z", 1), account("z", 2)])
        .await;
    assert!(matches!(within_batch, Err(FrameworkError::Conflict(_))));

    assert_eq!(client.list().await.unwrap().len(), 1);

    // Failed batches consume no ids.
    let ids = client
        .create_many(vec![account("p", 1), account("q", 2)])
        .await
        .unwrap();
    assert_eq!(ids, vec![2, 3]);
    assert!(client.create_many(vec![]).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_failed_mutations_leave_record_unchanged() {
    let client = start();
    let id = client.create(account("alice", 3)).await.unwrap();
    client.create(account("bob", 0)).await.unwrap();

    let overdrawn = client.perform_action(id, AccountAction::Withdraw(5)).await;
    assert!(overdrawn.is_err());

    // Balance is applied before the login check fails.
    let rejected = client
        .update(
            id,
            AccountUpdate {
                login: Some(String::new()),
                balance: Some(100),
            },
        )
        .await;
    assert!(rejected.is_err());

    let renamed_onto_bob = client
        .update(
            id,
            AccountUpdate {
                login: Some("bob".into()),
                balance: None,
            },
        )
        .await;
    assert!(matches!(renamed_onto_bob, Err(FrameworkError::Conflict(_))));

    let stored = client.get(id).await.unwrap().unwrap();
    assert_eq!(stored, Account { id, login: "alice".into(), balance: 3 });
}

#[tokio::test]
async fn test_concurrent_creates_get_distinct_ids() {
    let client = start();

    let mut handles = vec![];
    for i in 0..20 {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            client.create(account(&format!("user{i}"), i)).await
        }));
    }

    let mut ids = vec![];
    for handle in handles {
        ids.push(handle.await.unwrap().unwrap());
    }
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 20);
}

#[tokio::test]
async fn test_closed_actor_reports_closed() {
    let (actor, client) = ResourceActor::<Account>::new(1);
    drop(actor);
    assert!(matches!(client.list().await, Err(FrameworkError::ActorClosed)));
}
