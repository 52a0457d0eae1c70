use serde::Serialize;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

pub type CourseId = Uuid;

#[derive(Clone)]
pub struct Repository {
    pool: PgPool,
}

impl Repository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn course_by_id(&self, course_id: CourseId) -> Result<Option<Course>, sqlx::Error> {
        sqlx::query_as::<_, Course>("SELECT id, title, description FROM courses WHERE id = $1")
            .bind(course_id)
            .fetch_optional(&self.pool)
            .await
    }
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Course {
    pub id: CourseId,
    pub title: String,
    pub description: Option<String>,
}

/// Creates the `courses` table read by this service.
///
/// Course rows are written by an external system; the service itself never
/// mutates the table.
pub async fn setup(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS courses (
           id UUID PRIMARY KEY,
           title TEXT NOT NULL,
           description TEXT
        )"#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn insert_course(pool: &PgPool, course: &Course) {
        sqlx::query("INSERT INTO courses (id, title, description) VALUES ($1, $2, $3)")
            .bind(course.id)
            .bind(&course.title)
            .bind(&course.description)
            .execute(pool)
            .await
            .unwrap();
    }

    #[sqlx::test]
    async fn it_finds_a_course_by_id(pool: PgPool) {
        setup(&pool).await.unwrap();
        let course = Course {
            id: Uuid::new_v4(),
            title: "Rust basics".to_string(),
            description: Some("An introductory course".to_string()),
        };
        insert_course(&pool, &course).await;

        let repository = Repository::new(pool);
        let result = repository.course_by_id(course.id).await.unwrap();

        assert_eq!(result, Some(course));
    }

    #[sqlx::test]
    async fn it_returns_none_when_the_course_does_not_exist(pool: PgPool) {
        setup(&pool).await.unwrap();

        let repository = Repository::new(pool);
        let result = repository.course_by_id(Uuid::new_v4()).await.unwrap();

        assert_eq!(result, None);
    }

    #[sqlx::test]
    async fn it_preserves_a_null_description(pool: PgPool) {
        setup(&pool).await.unwrap();
        let course = Course {
            id: Uuid::new_v4(),
            title: "Untitled".to_string(),
            description: None,
        };
        insert_course(&pool, &course).await;

        let repository = Repository::new(pool);
        let result = repository.course_by_id(course.id).await.unwrap().unwrap();

        assert_eq!(result.description, None);
    }
}
