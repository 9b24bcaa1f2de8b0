use super::*;

/// Expect Ok(Some) when email and password match
#[tokio::test]
async fn accepts_matching_credentials() -> Result<(), TestError> {
    let test = TestBuilder::new().with_core_tables().build().await?;

    let user_service = UserService::new(&test.db);
    let created = user_service.create_user(new_user()).await.unwrap();

    let result = user_service
        .verify_credentials(TEST_EMAIL, TEST_PASSWORD)
        .await;

    assert!(result.is_ok());
    let user = result.unwrap().expect("credentials should match");
    assert_eq!(user.id, created.id);

    Ok(())
}

/// Expect Ok(None) for a wrong password
#[tokio::test]
async fn rejects_wrong_password() -> Result<(), TestError> {
    let test = TestBuilder::new().with_core_tables().build().await?;

    let user_service = UserService::new(&test.db);
    user_service.create_user(new_user()).await.unwrap();

    let result = user_service
        .verify_credentials(TEST_EMAIL, "not the password")
        .await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_none());

    Ok(())
}

/// Expect Ok(None) for a deactivated account regardless of the password
#[tokio::test]
async fn rejects_inactive_account() -> Result<(), TestError> {
    let test = TestBuilder::new().with_core_tables().build().await?;
    test.user()
        .insert_inactive_user(TEST_EMAIL, TEST_USER_NAME)
        .await?;

    let user_service = UserService::new(&test.db);
    let result = user_service
        .verify_credentials(TEST_EMAIL, TEST_PASSWORD)
        .await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_none());

    Ok(())
}

/// Expect Ok(None) for an unknown email
#[tokio::test]
async fn rejects_unknown_email() -> Result<(), TestError> {
    let test = TestBuilder::new().with_core_tables().build().await?;

    let user_service = UserService::new(&test.db);
    let result = user_service
        .verify_credentials("nobody@example.com", TEST_PASSWORD)
        .await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_none());

    Ok(())
}
