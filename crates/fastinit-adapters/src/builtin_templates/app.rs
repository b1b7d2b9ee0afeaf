//! The always-on `app/` package.

use fastinit_core::domain::{Feature, ProjectOptions, TemplateDescriptor};

use super::{empty, fill};

pub(super) fn descriptors() -> Vec<TemplateDescriptor> {
    vec![
        TemplateDescriptor::new("app/__init__.py", Feature::Core, empty),
        TemplateDescriptor::new("app/main.py", Feature::Core, main),
        TemplateDescriptor::new("app/api/__init__.py", Feature::Core, api_init),
        TemplateDescriptor::new("app/api/deps.py", Feature::Core, api_deps),
        TemplateDescriptor::new("app/api/v1/__init__.py", Feature::Core, empty),
        TemplateDescriptor::new("app/api/v1/users.py", Feature::Core, users_router),
        TemplateDescriptor::new("app/core/__init__.py", Feature::Core, empty),
        TemplateDescriptor::new("app/core/config.py", Feature::Core, config),
        TemplateDescriptor::new("app/core/security.py", Feature::Core, security),
        TemplateDescriptor::new("app/schemas/__init__.py", Feature::Core, empty),
        TemplateDescriptor::new("app/schemas/user.py", Feature::Core, user_schema),
        TemplateDescriptor::new("app/services/__init__.py", Feature::Core, empty),
        TemplateDescriptor::new("app/services/user_service.py", Feature::Core, user_service),
    ]
}

const MAIN: &str = r#"from fastapi import FastAPI

from app.api import api_router
from app.core.config import settings

app = FastAPI(title=settings.app_name, debug=settings.debug)
app.include_router(api_router)


@app.get("/health", tags=["health"])
async def health() -> dict[str, str]:
    return {"status": "ok"}
"#;

fn main(options: &ProjectOptions) -> String {
    fill(options, MAIN)
}

fn api_init(_: &ProjectOptions) -> String {
    r#"from fastapi import APIRouter

from app.api.v1 import users

api_router = APIRouter()
api_router.include_router(users.router)
"#
    .to_string()
}

fn api_deps(_: &ProjectOptions) -> String {
    r#"from typing import Annotated

from fastapi import Depends

from app.core.security import oauth2_scheme


def get_current_user(token: Annotated[str | None, Depends(oauth2_scheme)] = None) -> dict:
    # Replace with real token validation.
    return {"id": 1, "email": "user@example.com"}


CurrentUser = Annotated[dict, Depends(get_current_user)]
"#
    .to_string()
}

fn users_router(_: &ProjectOptions) -> String {
    r#"from fastapi import APIRouter

from app.schemas.user import User
from app.services.user_service import list_users as list_users_service

router = APIRouter(prefix="/users", tags=["users"])


@router.get("/", response_model=list[User])
async def list_users() -> list[User]:
    return list_users_service()
"#
    .to_string()
}

const CONFIG_HEAD: &str = r#"from pydantic_settings import BaseSettings, SettingsConfigDict


class Settings(BaseSettings):
    model_config = SettingsConfigDict(env_file=".env", extra="ignore")

    app_name: str = "{{PROJECT_NAME}}"
    debug: bool = False
"#;

fn config(options: &ProjectOptions) -> String {
    let mut out = fill(options, CONFIG_HEAD);
    if let Some(url) = options.database().connection_url() {
        out.push_str(&format!("    database_url: str = \"{url}\"\n"));
    }
    out.push_str("\n\nsettings = Settings()\n");
    out
}

fn security(_: &ProjectOptions) -> String {
    r#"from fastapi.security import OAuth2PasswordBearer

oauth2_scheme = OAuth2PasswordBearer(tokenUrl="token", auto_error=False)
"#
    .to_string()
}

fn user_schema(_: &ProjectOptions) -> String {
    r#"from pydantic import BaseModel, ConfigDict


class User(BaseModel):
    model_config = ConfigDict(from_attributes=True)

    id: int
    email: str
    is_active: bool = True
"#
    .to_string()
}

fn user_service(_: &ProjectOptions) -> String {
    r#"from app.schemas.user import User


def list_users() -> list[User]:
    # Sample data until the service is backed by a real store.
    return [
        User(id=1, email="ada@example.com", is_active=True),
        User(id=2, email="grace@example.com", is_active=False),
    ]
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use fastinit_core::domain::Database;

    fn options(database: Database) -> ProjectOptions {
        ProjectOptions::builder()
            .name("demo-api")
            .unwrap()
            .database(database)
            .build()
    }

    #[test]
    fn settings_default_to_project_name() {
        let out = config(&options(Database::None));
        assert!(out.contains(r#"app_name: str = "demo-api""#));
        assert!(!out.contains("database_url"));
    }

    #[test]
    fn settings_carry_database_url_when_selected() {
        let out = config(&options(Database::MySql));
        assert!(out.contains("database_url: str = \"mysql+pymysql://"));
        assert!(out.trim_end().ends_with("settings = Settings()"));
    }

    #[test]
    fn main_mounts_router_and_health() {
        let out = main(&options(Database::None));
        assert!(out.contains("app.include_router(api_router)"));
        assert!(out.contains("@app.get(\"/health\""));
    }
}
