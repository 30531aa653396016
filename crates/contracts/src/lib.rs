//! Типы, общие для клиента каталога и эндпоинта списка
pub mod domain;
