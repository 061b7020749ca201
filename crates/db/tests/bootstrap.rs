use sqlx::PgPool;

/// Full bootstrap test: connect, migrate, verify seed data.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    // Health check
    orderdesk_db::health_check(&pool).await.unwrap();

    // Catalog and demo clients are seeded by migration.
    let seeded = [("categories", 3), ("products", 8), ("clients", 3)];
    for (table, expected) in seeded {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, expected, "{table} should have {expected} seed rows");
    }
}

/// A fresh database has no periods, so order creation starts gated.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_no_periods_seeded(pool: PgPool) {
    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM quarterly_periods")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count.0, 0);
}
