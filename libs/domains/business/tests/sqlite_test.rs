use domain_business::{
    BusinessError, BusinessRepository, CreateBusiness, DEFAULT_LOCATION, DEFAULT_LOGO,
    SqliteBusinessRepository,
};
use test_utils::{TestDataBuilder, TestDatabase};
use uuid::Uuid;

#[tokio::test]
async fn test_create_business_for_user() {
    let db = TestDatabase::new().await;
    let builder = TestDataBuilder::from_test_name("test_create_business_for_user");
    let username = builder.username("alice");
    let owner_id = db.insert_user(&username, &builder.email("alice")).await;

    let repo = SqliteBusinessRepository::new(db.connection());
    let created = repo
        .create(CreateBusiness::for_owner(owner_id, username.clone()))
        .await
        .unwrap();

    assert_eq!(created.business_name, username);
    assert_eq!(created.city, DEFAULT_LOCATION);
    assert_eq!(created.logo, DEFAULT_LOGO);

    let fetched = repo.get_by_owner(owner_id).await.unwrap().unwrap();
    assert_eq!(fetched, created);
    assert_eq!(db.count("businesses").await, 1);
}

#[tokio::test]
async fn test_one_business_per_owner() {
    let db = TestDatabase::new().await;
    let owner_id = db.insert_user("bob", "bob@example.com").await;
    let repo = SqliteBusinessRepository::new(db.connection());

    repo.create(CreateBusiness::for_owner(owner_id, "bob"))
        .await
        .unwrap();
    let second = repo
        .create(CreateBusiness::for_owner(owner_id, "bob"))
        .await;

    assert!(matches!(second, Err(BusinessError::Database(_))));
    assert_eq!(db.count("businesses").await, 1);
}

#[tokio::test]
async fn test_owner_must_exist() {
    let db = TestDatabase::new().await;
    let repo = SqliteBusinessRepository::new(db.connection());

    let result = repo
        .create(CreateBusiness::for_owner(Uuid::now_v7(), "ghost"))
        .await;

    assert!(result.is_err());
    assert_eq!(db.count("businesses").await, 0);
}

#[tokio::test]
async fn test_get_by_owner_without_business() {
    let db = TestDatabase::new().await;
    let owner_id = db.insert_user("carol", "carol@example.com").await;
    let repo = SqliteBusinessRepository::new(db.connection());

    assert!(repo.get_by_owner(owner_id).await.unwrap().is_none());
}
