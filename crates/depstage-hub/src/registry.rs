//! Model repository list

/// Mirror endpoint serving the hub API in place of the default origin
pub const HF_MIRROR_ENDPOINT: &str = "https://hf-mirror.com";

/// Directory tree snapshots are materialized under
pub const HUB_TREE: &str = "huggingface.co";

/// Model repositories to snapshot, in download order
pub const MODEL_REPOS: &[&str] = &[
    "InfiniFlow/text_concat_xgb_v1.0",
    "InfiniFlow/deepdoc",
    "InfiniFlow/huqie",
    "BAAI/bge-large-zh-v1.5",
    "BAAI/bge-reranker-v2-m3",
    "maidalun1020/bce-embedding-base_v1",
    "maidalun1020/bce-reranker-base_v1",
];
