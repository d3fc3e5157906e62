use actor_framework::{ActorEntity, FrameworkError, Peers, ResourceActor};
use async_trait::async_trait;
use std::collections::HashSet;

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Member {
    id: u32,
    handle: String,
    visits: u32,
}

#[derive(Debug)]
struct MemberCreate {
    handle: String,
}

#[derive(Debug)]
struct MemberUpdate {
    handle: Option<String>,
    visits: Option<u32>,
}

#[derive(Debug, PartialEq, thiserror::Error)]
enum MemberError {
    #[error("handle taken: {0}")]
    HandleTaken(String),
    #[error("handle must not be empty")]
    EmptyHandle,
}

#[async_trait]
impl ActorEntity for Member {
    type Id = u32;
    type Create = MemberCreate;
    type Update = MemberUpdate;
    type Context = ();
    type Error = MemberError;

    fn from_create_params(id: u32, params: MemberCreate) -> Result<Self, Self::Error> {
        if params.handle.is_empty() {
            return Err(MemberError::EmptyHandle);
        }
        Ok(Self {
            id,
            handle: params.handle,
            visits: 0,
        })
    }

    async fn on_create(&mut self, peers: Peers<'_, Self>, _ctx: &()) -> Result<(), Self::Error> {
        if peers.any(|m| m.handle == self.handle) {
            return Err(MemberError::HandleTaken(self.handle.clone()));
        }
        Ok(())
    }

    async fn on_update(
        &mut self,
        update: MemberUpdate,
        peers: Peers<'_, Self>,
        _ctx: &(),
    ) -> Result<(), Self::Error> {
        // Mutates before it can fail; the actor must discard the partial update.
        if let Some(visits) = update.visits {
            self.visits = visits;
        }
        if let Some(handle) = update.handle {
            if peers.any(|m| m.id != self.id && m.handle == handle) {
                return Err(MemberError::HandleTaken(handle));
            }
            self.handle = handle;
        }
        Ok(())
    }
}

fn create(handle: &str) -> MemberCreate {
    MemberCreate {
        handle: handle.to_string(),
    }
}

// --- Tests ---

#[tokio::test]
async fn test_framework_full_lifecycle() {
    let (actor, client) = ResourceActor::new(10);
    let handle = tokio::spawn(actor.run(()));

    // 1. Empty store
    assert!(client.list().await.unwrap().is_empty());

    // 2. Create
    let alice: Member = client.create(create("alice")).await.unwrap();
    assert_eq!(alice.id, 1); // First ID should be 1
    let bob = client.create(create("bob")).await.unwrap();
    assert_eq!(bob.id, 2);

    // 3. Get
    let fetched = client.get(1).await.unwrap().unwrap();
    assert_eq!(fetched, alice);
    assert!(client.get(42).await.unwrap().is_none());

    // 4. Update
    let update = MemberUpdate {
        handle: Some("alicia".into()),
        visits: Some(3),
    };
    let updated = client.update(1, update).await.unwrap();
    assert_eq!(updated.handle, "alicia");
    assert_eq!(updated.visits, 3);

    // 5. List
    let handles: HashSet<String> = client
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|m| m.handle)
        .collect();
    assert_eq!(handles, HashSet::from(["alicia".to_string(), "bob".to_string()]));

    // 6. Shutdown once the last client is gone
    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_rejected_create_does_not_consume_an_id() {
    let (actor, client) = ResourceActor::<Member>::new(10);
    tokio::spawn(actor.run(()));

    client.create(create("alice")).await.unwrap();

    let duplicate = client.create(create("alice")).await;
    assert_eq!(
        duplicate,
        Err(FrameworkError::Entity(MemberError::HandleTaken("alice".into())))
    );
    let empty = client.create(create("")).await;
    assert_eq!(empty, Err(FrameworkError::Entity(MemberError::EmptyHandle)));

    let next = client.create(create("bob")).await.unwrap();
    assert_eq!(next.id, 2);
}

#[tokio::test]
async fn test_failed_update_leaves_store_untouched() {
    let (actor, client) = ResourceActor::<Member>::new(10);
    tokio::spawn(actor.run(()));

    client.create(create("alice")).await.unwrap();
    client.create(create("bob")).await.unwrap();

    let update = MemberUpdate {
        handle: Some("alice".into()),
        visits: Some(99),
    };
    let result = client.update(2, update).await;
    assert!(matches!(
        result,
        Err(FrameworkError::Entity(MemberError::HandleTaken(_)))
    ));

    let bob = client.get(2).await.unwrap().unwrap();
    assert_eq!(bob.handle, "bob");
    assert_eq!(bob.visits, 0);
}

#[tokio::test]
async fn test_update_unknown_id_is_not_found() {
    let (actor, client) = ResourceActor::<Member>::new(10);
    tokio::spawn(actor.run(()));

    let result = client
        .update(
            7,
            MemberUpdate {
                handle: None,
                visits: None,
            },
        )
        .await;
    assert_eq!(result, Err(FrameworkError::NotFound("7".to_string())));
}

/// Many tasks creating at once still get distinct, gap-free ids.
#[tokio::test]
async fn test_concurrent_creates_get_distinct_ids() {
    let (actor, client) = ResourceActor::<Member>::new(4);
    tokio::spawn(actor.run(()));

    let mut handles = vec![];
    for i in 0..50 {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            client.create(create(&format!("member-{i}"))).await
        }));
    }

    let mut ids = HashSet::new();
    for handle in handles {
        ids.insert(handle.await.unwrap().unwrap().id);
    }
    assert_eq!(ids, (1..=50).collect::<HashSet<u32>>());
}

#[tokio::test]
async fn test_requests_after_shutdown_report_closed_actor() {
    let (actor, client) = ResourceActor::<Member>::new(1);
    // Dropping the actor closes the receiving side.
    drop(actor);

    let result = client.list().await;
    assert_eq!(result, Err(FrameworkError::ActorClosed));
}

#[tokio::test]
async fn test_zero_buffer_size_still_serves_requests() {
    let (actor, client) = ResourceActor::<Member>::new(0);
    tokio::spawn(actor.run(()));

    let created = client.create(create("solo")).await.unwrap();
    assert_eq!(created.id, 1);
    assert_eq!(client.list().await.unwrap().len(), 1);
}
