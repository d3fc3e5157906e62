use actor_framework::ActorClient;
use chrono::NaiveDate;
use filmorate::clients::FilmClient;
use filmorate::film_actor::{self, FilmError};
use filmorate::model::{FilmCreate, FilmId, FilmUpdate};
use std::collections::HashSet;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn film(name: &str) -> FilmCreate {
    FilmCreate {
        name: Some(name.into()),
        description: Some("A drama".into()),
        release_date: Some(date(2000, 1, 1)),
        duration: Some(100),
    }
}

fn start() -> FilmClient {
    let (actor, client) = film_actor::new(16);
    tokio::spawn(actor.run(()));
    client
}

#[tokio::test]
async fn test_create_assigns_increasing_ids() {
    let client = start();
    assert!(client.list_films().await.unwrap().is_empty());

    let first = client.create_film(film("Mirror")).await.unwrap();
    let second = client.create_film(film("Nostalghia")).await.unwrap();

    assert_eq!(first.id, FilmId(1));
    assert_eq!(second.id, FilmId(2));

    let listed: HashSet<FilmId> = client
        .list_films()
        .await
        .unwrap()
        .into_iter()
        .map(|film| film.id)
        .collect();
    assert_eq!(listed, HashSet::from([first.id, second.id]));
}

#[tokio::test]
async fn test_description_limit() {
    let client = start();

    let too_long = FilmCreate {
        description: Some("x".repeat(201)),
        ..film("Long")
    };
    assert!(matches!(
        client.create_film(too_long).await,
        Err(FilmError::Validation(_))
    ));

    let at_limit = FilmCreate {
        description: Some("x".repeat(200)),
        ..film("Exact")
    };
    assert!(client.create_film(at_limit).await.is_ok());
}

#[tokio::test]
async fn test_release_date_boundary() {
    let client = start();

    let early = FilmCreate {
        release_date: Some(date(1895, 12, 27)),
        ..film("Too early")
    };
    assert!(matches!(
        client.create_film(early).await,
        Err(FilmError::Validation(_))
    ));

    let first_screening = FilmCreate {
        release_date: Some(date(1895, 12, 28)),
        ..film("L'Arrivée d'un train")
    };
    let stored = client.create_film(first_screening).await.unwrap();
    assert_eq!(stored.id, FilmId(1));
}

#[tokio::test]
async fn test_update_unknown_id_is_not_found() {
    let client = start();
    let update = FilmUpdate {
        id: Some(FilmId(99)),
        name: Some("Ghost".into()),
        ..FilmUpdate::default()
    };
    assert_eq!(
        client.update_film(update).await,
        Err(FilmError::NotFound("99".into()))
    );
}

#[tokio::test]
async fn test_update_keeps_omitted_fields() {
    let client = start();
    let created = client.create_film(film("Stalker")).await.unwrap();

    let update = FilmUpdate {
        id: Some(created.id),
        name: Some("Stalker (restored)".into()),
        ..FilmUpdate::default()
    };
    let updated = client.update_film(update).await.unwrap();

    assert_eq!(updated.name, "Stalker (restored)");
    assert_eq!(updated.duration, created.duration);
    assert_eq!(updated.release_date, created.release_date);
    assert_eq!(updated.description, created.description);
}

#[tokio::test]
async fn test_failed_update_leaves_film_untouched() {
    let client = start();
    let created = client.create_film(film("Solaris")).await.unwrap();

    let update = FilmUpdate {
        id: Some(created.id),
        name: Some("Renamed".into()),
        duration: Some(-1),
        ..FilmUpdate::default()
    };
    assert!(matches!(
        client.update_film(update).await,
        Err(FilmError::Validation(_))
    ));

    let stored = client.get(created.id).await.unwrap().unwrap();
    assert_eq!(stored, created);
}

#[tokio::test]
async fn test_ids_continue_after_rejected_create() {
    let client = start();
    client.create_film(film("One")).await.unwrap();
    let rejected = FilmCreate {
        duration: Some(0),
        ..film("Zero")
    };
    assert!(client.create_film(rejected).await.is_err());

    let next = client.create_film(film("Two")).await.unwrap();
    assert_eq!(next.id, FilmId(2));
}

#[tokio::test]
async fn test_concurrent_creates_get_distinct_ids() {
    let client = start();

    let tasks: Vec<_> = (0..40)
        .map(|i| {
            let client = client.clone();
            tokio::spawn(async move { client.create_film(film(&format!("Film {i}"))).await })
        })
        .collect();

    let mut ids = HashSet::new();
    for task in tasks {
        ids.insert(task.await.unwrap().unwrap().id.0);
    }
    assert_eq!(ids, (1..=40).collect::<HashSet<u64>>());
}
