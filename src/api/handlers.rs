use std::sync::{Arc, OnceLock};
use std::time::Instant;

use axum::response::{Html, Json};
use serde::Serialize;

pub type AppState<S> = Arc<S>;

static SERVER_START: OnceLock<Instant> = OnceLock::new();

/// Record process start so the health endpoint can report uptime.
pub fn record_startup() {
    SERVER_START.get_or_init(Instant::now);
}

pub async fn welcome() -> &'static str {
    "Welcome Client"
}

/// Simple health check endpoint
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub uptime: f64,
    pub timestamp: String,
    pub version: String,
}

pub async fn health_check() -> Json<HealthResponse> {
    let uptime = SERVER_START.get_or_init(Instant::now).elapsed().as_secs_f64();
    Json(HealthResponse {
        status: "OK".to_string(),
        uptime,
        timestamp: chrono::Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// API Documentation handlers
pub async fn get_api_docs() -> Html<&'static str> {
    Html(
        r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Employee Directory & Branch Management API Documentation</title>
    <link rel="stylesheet" type="text/css" href="https://unpkg.com/swagger-ui-dist@5.9.0/swagger-ui.css" />
    <style>
        html {
            box-sizing: border-box;
            overflow: -moz-scrollbars-vertical;
            overflow-y: scroll;
        }
        *, *:before, *:after {
            box-sizing: inherit;
        }
        body {
            margin: 0;
            background: #fafafa;
        }
    </style>
</head>
<body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@5.9.0/swagger-ui-bundle.js"></script>
    <script src="https://unpkg.com/swagger-ui-dist@5.9.0/swagger-ui-standalone-preset.js"></script>
    <script>
        window.onload = function() {
            const ui = SwaggerUIBundle({
                url: '/docs/openapi.json',
                dom_id: '#swagger-ui',
                deepLinking: true,
                presets: [
                    SwaggerUIBundle.presets.apis,
                    SwaggerUIStandalonePreset
                ],
                plugins: [
                    SwaggerUIBundle.plugins.DownloadUrl
                ],
                layout: "StandaloneLayout"
            });
        };
    </script>
</body>
</html>
"#,
    )
}

pub async fn get_openapi_spec() -> Json<serde_json::Value> {
    let spec = serde_json::json!({
        "openapi": "3.0.3",
        "info": {
            "title": "Employee Directory & Branch Management API",
            "version": env!("CARGO_PKG_VERSION"),
            "description": "CRUD API for branch and employee records. Success responses use the `{status, message, data}` envelope; validation failures use the lightweight `{error}` shape; business failures use the `{status: \"error\", message}` envelope.",
            "contact": {
                "name": "API Support"
            }
        },
        "servers": [
            {
                "url": "/",
                "description": "Current server"
            }
        ],
        "components": {
            "securitySchemes": {
                // Declared for clients; authentication is not enforced.
                "bearerAuth": {
                    "type": "http",
                    "scheme": "bearer",
                    "bearerFormat": "JWT"
                }
            },
            "schemas": {
                "Branch": {
                    "type": "object",
                    "required": ["id", "name", "address", "phone"],
                    "properties": {
                        "id": {
                            "type": "string",
                            "description": "Store-assigned identifier",
                            "example": "wl3jQESZeHi6QNDnpbJO"
                        },
                        "name": {"type": "string", "example": "Winnipeg Branch"},
                        "address": {"type": "string", "example": "1300 Joe St, Winnipeg, MB, R2X 4M5"},
                        "phone": {"type": "string", "example": "204-456-0022"}
                    }
                },
                "NewBranch": {
                    "type": "object",
                    "required": ["name", "address", "phone"],
                    "properties": {
                        "name": {"type": "string"},
                        "address": {"type": "string"},
                        "phone": {"type": "string"}
                    }
                },
                "BranchUpdate": {
                    "type": "object",
                    "description": "Any subset of branch fields; present fields overwrite, absent fields are kept",
                    "properties": {
                        "name": {"type": "string"},
                        "address": {"type": "string"},
                        "phone": {"type": "string"}
                    }
                },
                "Employee": {
                    "type": "object",
                    "required": ["id", "name", "position", "department", "email", "phone", "branchId"],
                    "properties": {
                        "id": {"type": "string"},
                        "name": {"type": "string", "example": "Pablito Salazar"},
                        "position": {"type": "string", "example": "Back End Developer"},
                        "department": {"type": "string", "example": "Development"},
                        "email": {"type": "string", "format": "email"},
                        "phone": {"type": "string", "example": "123-542-4594"},
                        "branchId": {"type": "string", "description": "Referenced branch; existence is not enforced"}
                    }
                },
                "NewEmployee": {
                    "type": "object",
                    "required": ["name", "position", "department", "email", "phone", "branchId"],
                    "properties": {
                        "name": {"type": "string"},
                        "position": {"type": "string"},
                        "department": {"type": "string"},
                        "email": {"type": "string", "format": "email"},
                        "phone": {"type": "string"},
                        "branchId": {"type": "string"}
                    }
                },
                "EmployeeUpdate": {
                    "type": "object",
                    "description": "Any subset of employee fields; present fields overwrite, absent fields are kept",
                    "properties": {
                        "name": {"type": "string"},
                        "position": {"type": "string"},
                        "department": {"type": "string"},
                        "email": {"type": "string", "format": "email"},
                        "phone": {"type": "string"},
                        "branchId": {"type": "string"}
                    }
                },
                "SuccessEnvelope": {
                    "type": "object",
                    "required": ["status"],
                    "properties": {
                        "status": {"type": "string", "enum": ["success"]},
                        "message": {"type": "string"},
                        "data": {}
                    }
                },
                "ErrorEnvelope": {
                    "type": "object",
                    "required": ["status", "message"],
                    "properties": {
                        "status": {"type": "string", "enum": ["error"]},
                        "message": {"type": "string"}
                    }
                },
                "ValidationError": {
                    "type": "object",
                    "required": ["error"],
                    "properties": {
                        "error": {
                            "type": "string",
                            "example": "Validation error: Body: Address cannot be empty"
                        }
                    }
                },
                "Health": {
                    "type": "object",
                    "properties": {
                        "status": {"type": "string", "example": "OK"},
                        "uptime": {"type": "number"},
                        "timestamp": {"type": "string", "format": "date-time"},
                        "version": {"type": "string"}
                    }
                }
            }
        },
        "security": [
            {"bearerAuth": []}
        ],
        "paths": {
            "/health": {
                "get": {
                    "tags": ["Health"],
                    "summary": "Server health status",
                    "security": [],
                    "responses": {
                        "200": {
                            "description": "Server health metrics",
                            "content": {"application/json": {"schema": {"$ref": "#/components/schemas/Health"}}}
                        }
                    }
                }
            },
            "/branches": {
                "get": {
                    "tags": ["Branches"],
                    "summary": "List all branches",
                    "responses": {
                        "200": {
                            "description": "Branches successfully retrieved",
                            "content": {"application/json": {"schema": {"$ref": "#/components/schemas/SuccessEnvelope"}}}
                        }
                    }
                },
                "post": {
                    "tags": ["Branches"],
                    "summary": "Create a new branch",
                    "requestBody": {
                        "required": true,
                        "content": {"application/json": {"schema": {"$ref": "#/components/schemas/NewBranch"}}}
                    },
                    "responses": {
                        "201": {
                            "description": "Branch has been created successfully",
                            "content": {"application/json": {"schema": {"$ref": "#/components/schemas/SuccessEnvelope"}}}
                        },
                        "400": {
                            "description": "Validation failure",
                            "content": {"application/json": {"schema": {"$ref": "#/components/schemas/ValidationError"}}}
                        }
                    }
                }
            },
            "/branches/{id}": {
                "get": {
                    "tags": ["Branches"],
                    "summary": "Get a branch by id",
                    "parameters": [
                        {"name": "id", "in": "path", "required": true, "schema": {"type": "string"}}
                    ],
                    "responses": {
                        "200": {
                            "description": "Branch retrieved successfully",
                            "content": {"application/json": {"schema": {"$ref": "#/components/schemas/SuccessEnvelope"}}}
                        },
                        "404": {
                            "description": "Branch does not exist",
                            "content": {"application/json": {"schema": {"$ref": "#/components/schemas/ErrorEnvelope"}}}
                        }
                    }
                },
                "put": {
                    "tags": ["Branches"],
                    "summary": "Update a branch (partial merge)",
                    "parameters": [
                        {"name": "id", "in": "path", "required": true, "schema": {"type": "string"}}
                    ],
                    "requestBody": {
                        "required": true,
                        "content": {"application/json": {"schema": {"$ref": "#/components/schemas/BranchUpdate"}}}
                    },
                    "responses": {
                        "200": {
                            "description": "Branch information updated successfully",
                            "content": {"application/json": {"schema": {"$ref": "#/components/schemas/SuccessEnvelope"}}}
                        },
                        "400": {
                            "description": "Validation failure",
                            "content": {"application/json": {"schema": {"$ref": "#/components/schemas/ValidationError"}}}
                        },
                        "404": {
                            "description": "Branch does not exist",
                            "content": {"application/json": {"schema": {"$ref": "#/components/schemas/ErrorEnvelope"}}}
                        }
                    }
                },
                "delete": {
                    "tags": ["Branches"],
                    "summary": "Delete a branch",
                    "parameters": [
                        {"name": "id", "in": "path", "required": true, "schema": {"type": "string"}}
                    ],
                    "responses": {
                        "200": {
                            "description": "Branch deleted successfully",
                            "content": {"application/json": {"schema": {"$ref": "#/components/schemas/SuccessEnvelope"}}}
                        },
                        "404": {
                            "description": "Branch does not exist",
                            "content": {"application/json": {"schema": {"$ref": "#/components/schemas/ErrorEnvelope"}}}
                        }
                    }
                }
            },
            "/employee": {
                "get": {
                    "tags": ["Employees"],
                    "summary": "List all employees",
                    "responses": {
                        "200": {
                            "description": "Employee list returned successfully",
                            "content": {"application/json": {"schema": {"$ref": "#/components/schemas/SuccessEnvelope"}}}
                        }
                    }
                },
                "post": {
                    "tags": ["Employees"],
                    "summary": "Create a new employee",
                    "requestBody": {
                        "required": true,
                        "content": {"application/json": {"schema": {"$ref": "#/components/schemas/NewEmployee"}}}
                    },
                    "responses": {
                        "201": {
                            "description": "Employee has been created successfully",
                            "content": {"application/json": {"schema": {"$ref": "#/components/schemas/SuccessEnvelope"}}}
                        },
                        "400": {
                            "description": "Validation failure",
                            "content": {"application/json": {"schema": {"$ref": "#/components/schemas/ValidationError"}}}
                        }
                    }
                }
            },
            "/employee/{id}": {
                "get": {
                    "tags": ["Employees"],
                    "summary": "Get an employee by id",
                    "parameters": [
                        {"name": "id", "in": "path", "required": true, "schema": {"type": "string"}}
                    ],
                    "responses": {
                        "200": {
                            "description": "Employee retrieved successfully",
                            "content": {"application/json": {"schema": {"$ref": "#/components/schemas/SuccessEnvelope"}}}
                        },
                        "404": {
                            "description": "Employee does not exist",
                            "content": {"application/json": {"schema": {"$ref": "#/components/schemas/ErrorEnvelope"}}}
                        }
                    }
                },
                "put": {
                    "tags": ["Employees"],
                    "summary": "Update an employee (partial merge)",
                    "parameters": [
                        {"name": "id", "in": "path", "required": true, "schema": {"type": "string"}}
                    ],
                    "requestBody": {
                        "required": true,
                        "content": {"application/json": {"schema": {"$ref": "#/components/schemas/EmployeeUpdate"}}}
                    },
                    "responses": {
                        "200": {
                            "description": "Employee information updated successfully",
                            "content": {"application/json": {"schema": {"$ref": "#/components/schemas/SuccessEnvelope"}}}
                        },
                        "400": {
                            "description": "Validation failure",
                            "content": {"application/json": {"schema": {"$ref": "#/components/schemas/ValidationError"}}}
                        },
                        "404": {
                            "description": "Employee does not exist",
                            "content": {"application/json": {"schema": {"$ref": "#/components/schemas/ErrorEnvelope"}}}
                        }
                    }
                },
                "delete": {
                    "tags": ["Employees"],
                    "summary": "Delete an employee",
                    "parameters": [
                        {"name": "id", "in": "path", "required": true, "schema": {"type": "string"}}
                    ],
                    "responses": {
                        "200": {
                            "description": "Employee deleted successfully",
                            "content": {"application/json": {"schema": {"$ref": "#/components/schemas/SuccessEnvelope"}}}
                        },
                        "404": {
                            "description": "Employee does not exist",
                            "content": {"application/json": {"schema": {"$ref": "#/components/schemas/ErrorEnvelope"}}}
                        }
                    }
                }
            },
            "/employee/branch/{branchId}": {
                "get": {
                    "tags": ["Employees"],
                    "summary": "List employees for a branch (exact match)",
                    "parameters": [
                        {"name": "branchId", "in": "path", "required": true, "schema": {"type": "string"}}
                    ],
                    "responses": {
                        "200": {
                            "description": "Employees for branch retrieved successfully",
                            "content": {"application/json": {"schema": {"$ref": "#/components/schemas/SuccessEnvelope"}}}
                        },
                        "404": {
                            "description": "No employees found for the branch",
                            "content": {"application/json": {"schema": {"$ref": "#/components/schemas/ErrorEnvelope"}}}
                        }
                    }
                }
            },
            "/employee/department/{departmentName}": {
                "get": {
                    "tags": ["Employees"],
                    "summary": "List employees in a department (case-insensitive match)",
                    "parameters": [
                        {"name": "departmentName", "in": "path", "required": true, "schema": {"type": "string"}}
                    ],
                    "responses": {
                        "200": {
                            "description": "Employees in department retrieved successfully",
                            "content": {"application/json": {"schema": {"$ref": "#/components/schemas/SuccessEnvelope"}}}
                        },
                        "404": {
                            "description": "No employees found in the department",
                            "content": {"application/json": {"schema": {"$ref": "#/components/schemas/ErrorEnvelope"}}}
                        }
                    }
                }
            }
        }
    });

    Json(spec)
}
