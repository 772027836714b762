pub mod models;
pub mod routes;
pub mod store;

use async_trait::async_trait;
use axum::Router;
use estante_db::{Database, Migration};
use estante_kernel::{InitCtx, Module};
use serde_json::json;

use store::BookStore;

/// Books module: the donated-book catalog and its HTTP surface
pub struct BooksModule;

impl BooksModule {
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Module for BooksModule {
    fn name(&self) -> &'static str {
        "books"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            "books module initialized"
        );
        Ok(())
    }

    fn routes(&self, db: &Database) -> Router {
        routes::router(BookStore::new(db.clone()))
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        Some(json!({
            "paths": {
                "/doar": {
                    "post": {
                        "summary": "Register a donated book",
                        "tags": ["Livros"],
                        "requestBody": {
                            "required": true,
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "$ref": "#/components/schemas/DoacaoLivro"
                                    }
                                }
                            }
                        },
                        "responses": {
                            "201": {
                                "description": "Book registered",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "$ref": "#/components/schemas/Mensagem"
                                        }
                                    }
                                }
                            },
                            "400": {
                                "description": "Missing required field(s)",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "$ref": "#/components/schemas/Erro"
                                        }
                                    }
                                }
                            },
                            "500": {
                                "description": "Storage fault",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "$ref": "#/components/schemas/Erro"
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
                "/livros": {
                    "get": {
                        "summary": "List the whole catalog",
                        "tags": ["Livros"],
                        "responses": {
                            "200": {
                                "description": "List of books",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "type": "array",
                                            "items": {
                                                "$ref": "#/components/schemas/Livro"
                                            }
                                        }
                                    }
                                }
                            },
                            "500": {
                                "description": "Storage fault",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "$ref": "#/components/schemas/Erro"
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
                "/livros/{id}": {
                    "delete": {
                        "summary": "Remove a book by id",
                        "tags": ["Livros"],
                        "parameters": [
                            {
                                "name": "id",
                                "in": "path",
                                "required": true,
                                "schema": {
                                    "type": "integer",
                                    "format": "int64"
                                }
                            }
                        ],
                        "responses": {
                            "200": {
                                "description": "Book removed",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "$ref": "#/components/schemas/Mensagem"
                                        }
                                    }
                                }
                            },
                            "404": {
                                "description": "No book matched the id",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "$ref": "#/components/schemas/Erro"
                                        }
                                    }
                                }
                            },
                            "500": {
                                "description": "Storage fault",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "$ref": "#/components/schemas/Erro"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            },
            "components": {
                "schemas": {
                    "Livro": {
                        "type": "object",
                        "properties": {
                            "id": {
                                "type": "integer",
                                "format": "int64",
                                "description": "Identifier assigned by the store"
                            },
                            "titulo": {
                                "type": "string"
                            },
                            "categoria": {
                                "type": "string"
                            },
                            "autor": {
                                "type": "string"
                            },
                            "imagem_url": {
                                "type": "string"
                            }
                        },
                        "required": ["id", "titulo", "categoria", "autor", "imagem_url"]
                    },
                    "DoacaoLivro": {
                        "type": "object",
                        "properties": {
                            "titulo": {
                                "type": "string"
                            },
                            "categoria": {
                                "type": "string"
                            },
                            "autor": {
                                "type": "string"
                            },
                            "imagem_url": {
                                "type": "string"
                            }
                        },
                        "required": ["titulo", "categoria", "autor", "imagem_url"]
                    },
                    "Mensagem": {
                        "type": "object",
                        "properties": {
                            "mensagem": {
                                "type": "string"
                            }
                        },
                        "required": ["mensagem"]
                    }
                }
            }
        }))
    }

    fn migrations(&self) -> Vec<Migration> {
        vec![Migration {
            id: "001_init",
            up: "CREATE TABLE IF NOT EXISTS books ( \
                 id INTEGER PRIMARY KEY AUTOINCREMENT, \
                 title TEXT NOT NULL, \
                 category TEXT NOT NULL, \
                 author TEXT NOT NULL, \
                 image_url TEXT NOT NULL \
                 )",
        }]
    }

    async fn start(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "books module started");
        Ok(())
    }

    async fn stop(&self) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "books module stopped");
        Ok(())
    }
}

/// Create a new instance of the books module
pub fn create_module() -> std::sync::Arc<dyn Module> {
    std::sync::Arc::new(BooksModule::new())
}
