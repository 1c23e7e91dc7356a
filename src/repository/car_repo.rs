use crate::models::{Car, CarPayload};
use sqlx::SqlitePool;

const CREATE_CARS_TABLE: &str = "CREATE TABLE IF NOT EXISTS cars (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    brand TEXT NOT NULL,
    model TEXT NOT NULL,
    year INTEGER NOT NULL,
    color TEXT,
    price REAL,
    mileage INTEGER,
    description TEXT,
    created_at DATETIME DEFAULT CURRENT_TIMESTAMP
)";

const CAR_COLUMNS: &str = "id, brand, model, year, color, price, mileage, description, created_at";

#[derive(Clone)]
pub struct CarRepository {
    pool: SqlitePool,
}

impl CarRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn init_schema(&self) -> Result<(), sqlx::Error> {
        sqlx::query(CREATE_CARS_TABLE).execute(&self.pool).await?;
        Ok(())
    }

    /// All cars, newest model year first; equal years keep insertion order.
    pub async fn find_all(&self) -> Result<Vec<Car>, sqlx::Error> {
        sqlx::query_as::<_, Car>(&format!(
            "SELECT {} FROM cars ORDER BY year DESC, id ASC",
            CAR_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Car>, sqlx::Error> {
        sqlx::query_as::<_, Car>(&format!("SELECT {} FROM cars WHERE id = ?", CAR_COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM cars")
            .fetch_one(&self.pool)
            .await
    }

    /// Inserts a car and returns the identity assigned by the store.
    pub async fn create(&self, car: &CarPayload) -> Result<i64, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO cars (brand, model, year, color, price, mileage, description) VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&car.brand)
        .bind(&car.model)
        .bind(car.year)
        .bind(&car.color)
        .bind(car.price)
        .bind(car.mileage)
        .bind(&car.description)
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    /// Overwrites every editable column; `id` and `created_at` are untouched.
    pub async fn update(&self, id: i64, car: &CarPayload) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE cars SET brand = ?, model = ?, year = ?, color = ?, price = ?, mileage = ?, description = ? WHERE id = ?",
        )
        .bind(&car.brand)
        .bind(&car.model)
        .bind(car.year)
        .bind(&car.color)
        .bind(car.price)
        .bind(car.mileage)
        .bind(&car.description)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn delete(&self, id: i64) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM cars WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Inserts the sample catalog when the table holds no rows. Returns how
    /// many cars were added.
    pub async fn seed_if_empty(&self) -> Result<usize, sqlx::Error> {
        if self.count().await? > 0 {
            return Ok(0);
        }

        let samples = sample_cars();
        let mut tx = self.pool.begin().await?;
        for car in &samples {
            sqlx::query(
                "INSERT INTO cars (brand, model, year, color, price, mileage, description) VALUES (?, ?, ?, ?, ?, ?, ?)",
            )
            .bind(&car.brand)
            .bind(&car.model)
            .bind(car.year)
            .bind(&car.color)
            .bind(car.price)
            .bind(car.mileage)
            .bind(&car.description)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;
        Ok(samples.len())
    }
}

fn sample_cars() -> Vec<CarPayload> {
    let car = |brand: &str, model: &str, year: i64, color: &str, price: f64, mileage: i64, description: &str| {
        CarPayload {
            brand: Some(brand.to_string()),
            model: Some(model.to_string()),
            year: Some(year),
            color: Some(color.to_string()),
            price: Some(price),
            mileage: Some(mileage),
            description: Some(description.to_string()),
        }
    };

    vec![
        car("Ford", "Mustang Fastback", 1967, "Highland Green", 85000.0, 64000, "390 V8, four-speed manual"),
        car("Chevrolet", "Corvette Stingray", 1963, "Riverside Red", 120000.0, 48000, "Split-window coupe"),
        car("Jaguar", "E-Type Series 1", 1961, "Opalescent Silver Blue", 250000.0, 39000, "3.8 litre roadster"),
        car("Volkswagen", "Beetle", 1959, "Pastel Blue", 22000.0, 112000, "Restored, original engine"),
        car("Mercedes-Benz", "300 SL Gullwing", 1955, "Silver", 1400000.0, 27000, "Matching numbers"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::connect;
    use tempfile::TempDir;

    async fn setup() -> (TempDir, CarRepository) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cars.db");
        let pool = connect(path.to_str().unwrap()).await.unwrap();
        let repo = CarRepository::new(pool);
        repo.init_schema().await.unwrap();
        (dir, repo)
    }

    fn payload(brand: &str, model: &str, year: i64) -> CarPayload {
        CarPayload {
            brand: Some(brand.to_string()),
            model: Some(model.to_string()),
            year: Some(year),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn init_schema_is_repeatable() {
        let (_dir, repo) = setup().await;
        repo.init_schema().await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn create_assigns_increasing_ids_and_timestamp() {
        let (_dir, repo) = setup().await;
        let first = repo.create(&payload("Alfa Romeo", "Giulia", 1965)).await.unwrap();
        let second = repo.create(&payload("Lancia", "Fulvia", 1968)).await.unwrap();
        assert!(second > first);

        let stored = repo.find_by_id(first).await.unwrap().unwrap();
        assert_eq!(stored.brand, "Alfa Romeo");
        assert_eq!(stored.year, 1965);
        assert_eq!(stored.color, None);
        assert!(stored.created_at.and_utc().timestamp() > 0);
    }

    #[tokio::test]
    async fn find_all_orders_by_year_then_insertion() {
        let (_dir, repo) = setup().await;
        let a = repo.create(&payload("Austin", "Healey 3000", 1963)).await.unwrap();
        repo.create(&payload("BMW", "507", 1957)).await.unwrap();
        let c = repo.create(&payload("Shelby", "Cobra", 1963)).await.unwrap();
        repo.create(&payload("Datsun", "240Z", 1970)).await.unwrap();

        let cars = repo.find_all().await.unwrap();
        let years: Vec<i64> = cars.iter().map(|c| c.year).collect();
        assert_eq!(years, vec![1970, 1963, 1963, 1957]);
        assert_eq!(cars[1].id, a);
        assert_eq!(cars[2].id, c);
    }

    #[tokio::test]
    async fn update_replaces_all_editable_fields() {
        let (_dir, repo) = setup().await;
        let mut car = payload("Fiat", "500", 1957);
        car.color = Some("Red".to_string());
        car.price = Some(15000.0);
        let id = repo.create(&car).await.unwrap();
        let before = repo.find_by_id(id).await.unwrap().unwrap();

        repo.update(id, &payload("Fiat", "600", 1960)).await.unwrap();

        let after = repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(after.model, "600");
        assert_eq!(after.year, 1960);
        assert_eq!(after.color, None);
        assert_eq!(after.price, None);
        assert_eq!(after.created_at, before.created_at);
    }

    #[tokio::test]
    async fn update_with_null_brand_violates_constraint() {
        let (_dir, repo) = setup().await;
        let id = repo.create(&payload("Saab", "96", 1966)).await.unwrap();
        let result = repo.update(id, &CarPayload::default()).await;
        assert!(matches!(result, Err(sqlx::Error::Database(_))));
    }

    #[tokio::test]
    async fn delete_removes_the_row() {
        let (_dir, repo) = setup().await;
        let id = repo.create(&payload("Triumph", "TR6", 1969)).await.unwrap();
        repo.delete(id).await.unwrap();
        assert!(repo.find_by_id(id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn seed_only_fills_an_empty_table() {
        let (_dir, repo) = setup().await;
        let inserted = repo.seed_if_empty().await.unwrap();
        assert_eq!(inserted, 5);
        assert_eq!(repo.seed_if_empty().await.unwrap(), 0);
        assert_eq!(repo.count().await.unwrap(), 5);
    }
}
