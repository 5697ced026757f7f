use mongodb::bson::doc;
use mongodb::{Client, Collection, Database};
use std::error::Error;

const DEFAULT_DATABASE: &str = "mern_app";

#[derive(Clone)]
pub struct MongoDB {
    db: Database,
}

impl MongoDB {
    /// Monta o client sem abrir conexão: o driver conecta sob demanda, então
    /// um servidor fora do ar só aparece no primeiro comando (ou em `ping`).
    ///
    /// O banco vem de `database_name`, depois do path da URI, e por último
    /// `mern_app`.
    pub async fn new(uri: &str, database_name: Option<&str>) -> Result<Self, Box<dyn Error>> {
        let mut client_options = mongodb::options::ClientOptions::parse(uri).await?;

        // Connection pool
        client_options.max_pool_size = Some(20);
        client_options.min_pool_size = Some(2);
        client_options.max_idle_time = Some(std::time::Duration::from_secs(300));

        // Timeouts da URI têm precedência
        client_options
            .connect_timeout
            .get_or_insert(std::time::Duration::from_secs(5));
        client_options
            .server_selection_timeout
            .get_or_insert(std::time::Duration::from_secs(5));

        let db_name = database_name
            .map(str::to_string)
            .or_else(|| client_options.default_database.clone())
            .unwrap_or_else(|| DEFAULT_DATABASE.to_string());

        let client = Client::with_options(client_options)?;
        let db = client.database(&db_name);

        log::info!("📦 Using database: {}", db_name);

        Ok(Self { db })
    }

    pub async fn ping(&self) -> Result<(), mongodb::error::Error> {
        self.db.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}
