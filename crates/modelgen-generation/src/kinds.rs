//! Built-in model kinds
//!
//! Both target Python and ship their templates in the bundled template root.

use crate::data_model::{DataModel, ModelKind};

/// `class Name(BaseModel):` with pydantic-style annotations
#[derive(Debug, Clone, Copy)]
pub struct PydanticBaseModel;

impl ModelKind for PydanticBaseModel {
    const TEMPLATE_FILE_NAME: &'static str = "pydantic/BaseModel.hbs";
}

/// A `@dataclass` decorated class
#[derive(Debug, Clone, Copy)]
pub struct DataClass;

impl ModelKind for DataClass {
    const TEMPLATE_FILE_NAME: &'static str = "dataclass.hbs";
}

/// Data model rendered as a pydantic `BaseModel`
pub type BaseModel = DataModel<PydanticBaseModel>;

/// Data model rendered as a standard-library dataclass
pub type DataClassModel = DataModel<DataClass>;
