mod person;
mod rectangle;
