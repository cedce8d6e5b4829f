//! Static validation schemas, one per entity and operation. Declared once at
//! process start and resolved by route binding; never mutated at runtime.

use crate::logic::validate::{FieldRule, PartRules, RequestPart, RequestSchema};

pub mod branches {
    use super::*;

    // POST /branches
    pub static CREATE: RequestSchema = RequestSchema {
        parts: &[PartRules {
            part: RequestPart::Body,
            rules: &[
                FieldRule::string("name", "Name").required(),
                FieldRule::string("address", "Address").required(),
                FieldRule::string("phone", "Phone").required(),
            ],
        }],
    };

    // PUT /branches/:id
    pub static UPDATE: RequestSchema = RequestSchema {
        parts: &[
            PartRules {
                part: RequestPart::Params,
                rules: &[FieldRule::string("id", "Branch ID").required()],
            },
            PartRules {
                part: RequestPart::Body,
                rules: &[
                    FieldRule::string("name", "Name"),
                    FieldRule::string("address", "Address"),
                    FieldRule::string("phone", "Phone"),
                ],
            },
        ],
    };

    // GET /branches/:id
    pub static GET_BY_ID: RequestSchema = RequestSchema {
        parts: &[PartRules {
            part: RequestPart::Params,
            rules: &[FieldRule::string("id", "Branch ID").required()],
        }],
    };

    // DELETE /branches/:id
    pub static DELETE: RequestSchema = RequestSchema {
        parts: &[PartRules {
            part: RequestPart::Params,
            rules: &[FieldRule::string("id", "Branch ID").required()],
        }],
    };
}

pub mod employee {
    use super::*;

    // POST /employee
    pub static CREATE: RequestSchema = RequestSchema {
        parts: &[PartRules {
            part: RequestPart::Body,
            rules: &[
                FieldRule::string("name", "Name").required(),
                FieldRule::string("position", "Position").required(),
                FieldRule::string("department", "Department").required(),
                FieldRule::string("email", "Email").required().email(),
                FieldRule::string("phone", "Phone").required(),
                FieldRule::string("branchId", "Branch ID").required(),
            ],
        }],
    };

    // PUT /employee/:id
    pub static UPDATE: RequestSchema = RequestSchema {
        parts: &[
            PartRules {
                part: RequestPart::Params,
                rules: &[FieldRule::string("id", "Employee ID").required()],
            },
            PartRules {
                part: RequestPart::Body,
                rules: &[
                    FieldRule::string("name", "Name"),
                    FieldRule::string("position", "Position"),
                    FieldRule::string("department", "Department"),
                    FieldRule::string("email", "Email").email(),
                    FieldRule::string("phone", "Phone"),
                    FieldRule::string("branchId", "Branch ID"),
                ],
            },
        ],
    };

    // GET /employee/:id
    pub static GET_BY_ID: RequestSchema = RequestSchema {
        parts: &[PartRules {
            part: RequestPart::Params,
            rules: &[FieldRule::string("id", "Employee ID").required()],
        }],
    };

    // DELETE /employee/:id
    pub static DELETE: RequestSchema = RequestSchema {
        parts: &[PartRules {
            part: RequestPart::Params,
            rules: &[FieldRule::string("id", "Employee ID").required()],
        }],
    };

    // GET /employee/branch/:branchId
    pub static GET_BY_BRANCH: RequestSchema = RequestSchema {
        parts: &[PartRules {
            part: RequestPart::Params,
            rules: &[FieldRule::string("branchId", "Branch ID").required()],
        }],
    };

    // GET /employee/department/:departmentName
    pub static GET_BY_DEPARTMENT: RequestSchema = RequestSchema {
        parts: &[PartRules {
            part: RequestPart::Params,
            rules: &[FieldRule::string("departmentName", "Department name").required()],
        }],
    };
}
