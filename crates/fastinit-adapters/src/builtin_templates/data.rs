//! Persistence files: `app/models/` and `app/db/`.

use fastinit_core::domain::{Database, Feature, Orm, ProjectOptions, TemplateDescriptor};

use super::empty;

pub(super) fn descriptors() -> Vec<TemplateDescriptor> {
    vec![
        TemplateDescriptor::new("app/models/__init__.py", Feature::Models, models_init),
        TemplateDescriptor::variant("app/models/user.py", Orm::SqlAlchemy, sqlalchemy_user),
        TemplateDescriptor::variant("app/models/user.py", Orm::SqlModel, sqlmodel_user),
        TemplateDescriptor::new("app/db/__init__.py", Feature::DbBase, empty),
        TemplateDescriptor::new("app/db/base.py", Feature::DbBase, base),
        TemplateDescriptor::new("app/db/session.py", Feature::Database, session),
    ]
}

fn models_init(_: &ProjectOptions) -> String {
    "from app.models.user import User\n\n__all__ = [\"User\"]\n".to_string()
}

fn sqlalchemy_user(_: &ProjectOptions) -> String {
    r#"from sqlalchemy import Boolean, Integer, String
from sqlalchemy.orm import Mapped, mapped_column

from app.db.base import Base


class User(Base):
    __tablename__ = "users"

    id: Mapped[int] = mapped_column(Integer, primary_key=True, index=True)
    email: Mapped[str] = mapped_column(String(255), unique=True, index=True)
    is_active: Mapped[bool] = mapped_column(Boolean, default=True)
"#
    .to_string()
}

fn sqlmodel_user(_: &ProjectOptions) -> String {
    r#"from sqlmodel import Field, SQLModel


class User(SQLModel, table=True):
    __tablename__ = "users"

    id: int | None = Field(default=None, primary_key=True)
    email: str = Field(index=True, unique=True)
    is_active: bool = True
"#
    .to_string()
}

fn base(options: &ProjectOptions) -> String {
    match options.orm() {
        Orm::SqlModel => r#"from sqlmodel import SQLModel

# SQLModel tables register on SQLModel.metadata.
Base = SQLModel
"#
        .to_string(),
        Orm::SqlAlchemy | Orm::None => r#"from sqlalchemy.orm import DeclarativeBase


class Base(DeclarativeBase):
    pass
"#
        .to_string(),
    }
}

fn session(options: &ProjectOptions) -> String {
    let engine_args = match options.database() {
        Database::Sqlite => ", connect_args={\"check_same_thread\": False}",
        Database::MySql | Database::PostgreSql | Database::None => ", pool_pre_ping=True",
    };

    let label = options.database().label();

    match options.orm() {
        Orm::SqlModel => format!(
            r#""""{label} engine and session dependency."""

from collections.abc import Iterator

from sqlmodel import Session, create_engine

from app.core.config import settings

engine = create_engine(settings.database_url{engine_args})


def get_session() -> Iterator[Session]:
    with Session(engine) as session:
        yield session
"#
        ),
        Orm::SqlAlchemy | Orm::None => format!(
            r#""""{label} engine and session dependency."""

from collections.abc import Iterator

from sqlalchemy import create_engine
from sqlalchemy.orm import Session, sessionmaker

from app.core.config import settings

engine = create_engine(settings.database_url{engine_args})
SessionLocal = sessionmaker(bind=engine, autocommit=False, autoflush=False)


def get_session() -> Iterator[Session]:
    session = SessionLocal()
    try:
        yield session
    finally:
        session.close()
"#
        ),
    }
}
