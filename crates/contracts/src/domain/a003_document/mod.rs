pub mod aggregate;

pub use aggregate::{
    division_doc_ids, CorpDoc, Division, PermissionUser, UserPermissions, WprDoc, CORP_DOCS,
    CRE_DOCS, GOS_DOCS, WPR_DOCS,
};
