//! The fixed label set shown on the registration page.

pub const TITLE: &str = "Приложение для записи на тренировки Kangoo Jumps";
pub const LIST_HEADING: &str = "Список участников";

pub const FIRST_NAME: &str = "Имя";
pub const LAST_NAME: &str = "Фамилия";
pub const SHOE_SIZE: &str = "Размер обуви";
pub const CLUB: &str = "Клуб";
pub const DAY: &str = "День";

pub const CHOOSE_SHOE_SIZE: &str = "Выберите размер обуви";
pub const CHOOSE_CLUB: &str = "Выберите клуб";
pub const CHOOSE_DAY: &str = "Выберите день";

pub const ADD: &str = "Добавить";
pub const SAVE: &str = "Сохранить";
pub const EDIT: &str = "Редактировать";
pub const DELETE: &str = "Удалить";

pub const MONDAY: &str = "Понедельник";
pub const WEDNESDAY: &str = "Среда";
pub const FRIDAY: &str = "Пятница";
