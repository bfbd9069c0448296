pub const ADMIN_HTML: &str = r#"<!DOCTYPE html>
<html lang="ru">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Adler Tours — админка</title>
  <style>
    :root {
      --bg: #f4f5f7;
      --card: #ffffff;
      --ink: #21242b;
      --muted: #707786;
      --accent: #2f6fd4;
      --ok: #2d7a4b;
      --danger: #c63b2b;
      --border: #dfe2e8;
      --radius: 12px;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: -apple-system, "Segoe UI", Roboto, sans-serif;
      padding: 20px 16px 48px;
    }

    .shell {
      max-width: 880px;
      margin: 0 auto;
    }

    header {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 10px;
      margin-bottom: 6px;
    }

    header h1 {
      margin: 0;
      font-size: 1.4rem;
    }

    .status {
      color: var(--muted);
      font-size: 0.9rem;
      margin-bottom: 14px;
    }

    nav {
      display: flex;
      gap: 8px;
      margin-bottom: 16px;
    }

    .nav-btn {
      border: 1px solid var(--border);
      background: var(--card);
      border-radius: 999px;
      padding: 8px 16px;
      font-size: 0.95rem;
      cursor: pointer;
      color: var(--muted);
    }

    .nav-btn.active {
      background: var(--accent);
      border-color: var(--accent);
      color: white;
    }

    .banner {
      border-radius: var(--radius);
      padding: 10px 14px;
      margin-bottom: 12px;
      font-size: 0.95rem;
    }

    .banner-error {
      background: rgba(198, 59, 43, 0.1);
      color: var(--danger);
    }

    .banner-success {
      background: rgba(45, 122, 75, 0.12);
      color: var(--ok);
    }

    .hidden {
      display: none !important;
    }

    .panel {
      background: var(--card);
      border: 1px solid var(--border);
      border-radius: var(--radius);
      padding: 16px;
      margin-bottom: 16px;
    }

    .panel h2 {
      margin: 0 0 12px;
      font-size: 1.05rem;
    }

    .field {
      margin-bottom: 10px;
    }

    .field label {
      display: block;
      font-size: 0.85rem;
      color: var(--muted);
      margin-bottom: 4px;
    }

    .field input,
    .field select,
    .field textarea {
      width: 100%;
      border: 1px solid var(--border);
      border-radius: 8px;
      padding: 8px 10px;
      font-size: 0.95rem;
      background: white;
      color: var(--ink);
    }

    .field-inline {
      display: flex;
      align-items: center;
      gap: 8px;
      font-size: 0.95rem;
    }

    .field-inline input {
      width: auto;
    }

    .btn {
      appearance: none;
      border: none;
      border-radius: 8px;
      padding: 9px 14px;
      font-size: 0.92rem;
      font-weight: 600;
      cursor: pointer;
    }

    .btn-primary {
      background: var(--accent);
      color: white;
    }

    .btn-outline {
      background: transparent;
      border: 1px solid var(--border);
      color: var(--ink);
    }

    .card {
      background: var(--card);
      border: 1px solid var(--border);
      border-radius: var(--radius);
      padding: 14px 16px;
      margin-bottom: 12px;
    }

    .card-header {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 10px;
      margin-bottom: 6px;
    }

    .card-title {
      font-weight: 600;
    }

    .card-tag {
      font-size: 0.8rem;
      color: var(--muted);
    }

    .card-photo {
      width: 100%;
      height: 140px;
      object-fit: cover;
      border-radius: 8px;
      margin-bottom: 10px;
      display: block;
    }

    .card-photo--placeholder {
      background: linear-gradient(135deg, #c8cdd8, #e4e7ee);
    }

    .card-body {
      color: var(--muted);
      font-size: 0.92rem;
      display: grid;
      gap: 2px;
      margin-bottom: 10px;
    }

    .card-footer {
      display: flex;
      flex-wrap: wrap;
      gap: 8px;
    }

    .badge {
      font-size: 0.75rem;
      border-radius: 999px;
      padding: 2px 10px;
    }

    .badge-on {
      background: rgba(45, 122, 75, 0.12);
      color: var(--ok);
    }

    .badge-off {
      background: rgba(198, 59, 43, 0.1);
      color: var(--danger);
    }

    .filters {
      display: flex;
      flex-wrap: wrap;
      gap: 8px;
      margin-bottom: 14px;
    }

    .filter-btn {
      border: 1px solid var(--border);
      background: var(--card);
      border-radius: 999px;
      padding: 6px 12px;
      font-size: 0.85rem;
      cursor: pointer;
      color: var(--muted);
    }

    .filter-btn.active {
      background: var(--ink);
      border-color: var(--ink);
      color: white;
    }

    .modal {
      position: fixed;
      inset: 0;
      display: grid;
      place-items: center;
      z-index: 10;
    }

    .modal-backdrop {
      position: absolute;
      inset: 0;
      background: rgba(20, 24, 33, 0.5);
    }

    .modal-window {
      position: relative;
      background: var(--card);
      border-radius: var(--radius);
      padding: 18px;
      width: min(440px, calc(100vw - 32px));
    }

    .modal-window h2 {
      margin: 0 0 12px;
      font-size: 1.05rem;
    }

    .modal-actions {
      display: flex;
      justify-content: flex-end;
      gap: 8px;
      margin-top: 12px;
    }
  </style>
</head>
<body>
  <div class="shell">
    <header>
      <h1>Adler Tours — админка</h1>
      <button type="button" class="btn btn-outline" id="change-token-btn">Сменить токен</button>
    </header>
    <div class="status" id="status-indicator">Подключение...</div>

    <div id="admin-error" class="banner banner-error hidden"></div>
    <div id="admin-success" class="banner banner-success hidden"></div>

    <div class="panel hidden" id="token-panel">
      <h2>Admin token</h2>
      <div class="field">
        <label for="token-input">Значение ADMIN_TOKEN на сервере</label>
        <input type="password" id="token-input" autocomplete="off" />
      </div>
      <button type="button" class="btn btn-primary" id="token-save">Сохранить</button>
    </div>

    <nav>
      <button type="button" class="nav-btn active" data-view="tours">Туры</button>
      <button type="button" class="nav-btn" data-view="bookings">Заявки</button>
    </nav>

    <section id="view-tours">
      <div class="panel">
        <h2>Новый тур</h2>
        <form id="create-tour-form">
          <div class="field">
            <label for="new-title">Название *</label>
            <input type="text" id="new-title" />
          </div>
          <div class="field">
            <label for="new-type">Тип *</label>
            <select id="new-type">
              <option value="jeeping">Джипинг</option>
              <option value="yacht">Яхта</option>
              <option value="excursion">Экскурсия</option>
            </select>
          </div>
          <div class="field">
            <label for="new-price">Цена от, ₽</label>
            <input type="number" id="new-price" min="0" step="any" />
          </div>
          <div class="field">
            <label for="new-duration">Длительность, ч</label>
            <input type="number" id="new-duration" min="0" step="any" />
          </div>
          <div class="field">
            <label for="new-description">Описание</label>
            <textarea id="new-description" rows="2"></textarea>
          </div>
          <div class="field">
            <label for="new-image">Фото</label>
            <input type="file" id="new-image" accept="image/*" />
          </div>
          <div class="field field-inline">
            <input type="checkbox" id="new-active" checked />
            <label for="new-active">Показывать в каталоге</label>
          </div>
          <button type="submit" class="btn btn-primary">Создать тур</button>
        </form>
      </div>
      <div id="tours-list">Загрузка туров...</div>
    </section>

    <section id="view-bookings" class="hidden">
      <div class="filters">
        <button type="button" class="filter-btn active" data-status="">Все</button>
        <button type="button" class="filter-btn" data-status="new">Новые</button>
        <button type="button" class="filter-btn" data-status="confirmed">Подтверждённые</button>
        <button type="button" class="filter-btn" data-status="done">Завершённые</button>
        <button type="button" class="filter-btn" data-status="cancelled">Отменённые</button>
      </div>
      <div id="bookings-list">Загрузка заявок...</div>
    </section>
  </div>

  <div class="modal hidden" id="tour-modal">
    <div class="modal-backdrop"></div>
    <div class="modal-window">
      <h2>Редактировать тур</h2>
      <form id="edit-tour-form">
        <div class="field">
          <label for="edit-title">Название *</label>
          <input type="text" id="edit-title" />
        </div>
        <div class="field">
          <label for="edit-type">Тип *</label>
          <select id="edit-type">
            <option value="jeeping">Джипинг</option>
            <option value="yacht">Яхта</option>
            <option value="excursion">Экскурсия</option>
          </select>
        </div>
        <div class="field">
          <label for="edit-price">Цена от, ₽</label>
          <input type="number" id="edit-price" min="0" step="any" />
        </div>
        <div class="field">
          <label for="edit-duration">Длительность, ч</label>
          <input type="number" id="edit-duration" min="0" step="any" />
        </div>
        <div class="field">
          <label for="edit-description">Описание</label>
          <textarea id="edit-description" rows="3"></textarea>
        </div>
        <div class="modal-actions">
          <button type="button" class="btn btn-outline" id="modal-cancel-btn">Отмена</button>
          <button type="submit" class="btn btn-primary">Сохранить</button>
        </div>
      </form>
    </div>
  </div>

  <script>
    const statusEl = document.getElementById('status-indicator');
    const errorEl = document.getElementById('admin-error');
    const successEl = document.getElementById('admin-success');
    const tokenPanel = document.getElementById('token-panel');
    const tokenInput = document.getElementById('token-input');
    const toursListEl = document.getElementById('tours-list');
    const bookingsListEl = document.getElementById('bookings-list');
    const tourModal = document.getElementById('tour-modal');
    const editForm = document.getElementById('edit-tour-form');
    const createForm = document.getElementById('create-tour-form');

    let currentView = 'tours';
    let currentStatusFilter = '';
    let currentEditTourId = null;
    let successTimer = null;

    const setStatus = (text) => {
      statusEl.textContent = text;
    };

    const showError = (text) => {
      errorEl.textContent = text;
      errorEl.classList.remove('hidden');
      successEl.classList.add('hidden');
    };

    const showSuccess = (text) => {
      successEl.textContent = text;
      successEl.classList.remove('hidden');
      errorEl.classList.add('hidden');
      clearTimeout(successTimer);
      successTimer = setTimeout(() => successEl.classList.add('hidden'), 2500);
    };

    const openTokenPanel = () => {
      tokenPanel.classList.remove('hidden');
      tokenInput.focus();
    };

    const api = async (path, options = {}) => {
      const headers = options.headers || {};
      if (options.body && !(options.body instanceof FormData) && !headers['Content-Type']) {
        headers['Content-Type'] = 'application/json';
      }

      let res;
      try {
        res = await fetch(path, { ...options, headers });
      } catch (err) {
        setStatus('Нет связи с сервером');
        showError('Сервис недоступен. Попробуйте ещё раз чуть позже.');
        throw err;
      }

      if (res.status === 401) {
        const text = await res.text();
        setStatus('Требуется токен');
        openTokenPanel();
        showError(text || 'Неавторизован (проверьте ADMIN_TOKEN)');
        throw new Error(text);
      }
      if (!res.ok) {
        const text = await res.text();
        setStatus('Подключено к API');
        showError(text || 'Ошибка ' + res.status);
        throw new Error(text);
      }

      setStatus('Подключено к API');
      if (res.status === 204) {
        return null;
      }
      const text = await res.text();
      if (!text) {
        return null;
      }
      try {
        return JSON.parse(text);
      } catch {
        return text;
      }
    };

    // --- токен ---

    document.getElementById('token-save').addEventListener('click', async () => {
      const token = tokenInput.value.trim();
      if (!token) {
        showError('Введите токен.');
        return;
      }
      try {
        await api('/admin/api/session', { method: 'POST', body: JSON.stringify({ token }) });
        tokenInput.value = '';
        tokenPanel.classList.add('hidden');
        showSuccess('Токен сохранён');
        reloadCurrentView();
      } catch {}
    });

    document.getElementById('change-token-btn').addEventListener('click', async () => {
      try {
        await api('/admin/api/session', { method: 'DELETE' });
      } catch {}
      setStatus('Токен не задан');
      openTokenPanel();
    });

    // --- вкладки ---

    const reloadCurrentView = () => {
      if (currentView === 'bookings') {
        loadBookings();
      } else {
        loadTours();
      }
    };

    document.querySelectorAll('.nav-btn').forEach((btn) => {
      btn.addEventListener('click', () => {
        document.querySelectorAll('.nav-btn').forEach((other) => other.classList.remove('active'));
        btn.classList.add('active');
        currentView = btn.dataset.view;
        document.getElementById('view-tours').classList.toggle('hidden', currentView !== 'tours');
        document.getElementById('view-bookings').classList.toggle('hidden', currentView !== 'bookings');
        reloadCurrentView();
      });
    });

    // --- туры ---

    const tourCard = (tour) => {
      const card = document.createElement('div');
      card.className = 'card';

      if (tour.image_url) {
        const img = document.createElement('img');
        img.className = 'card-photo';
        img.src = tour.image_url;
        img.alt = tour.title;
        img.addEventListener('error', () => {
          const fallback = document.createElement('div');
          fallback.className = 'card-photo card-photo--placeholder';
          img.replaceWith(fallback);
        });
        card.appendChild(img);
      }

      const header = document.createElement('div');
      header.className = 'card-header';
      const title = document.createElement('div');
      title.className = 'card-title';
      title.textContent = '#' + tour.id + ' — ' + tour.title;
      const badge = document.createElement('span');
      badge.className = tour.is_active ? 'badge badge-on' : 'badge badge-off';
      badge.textContent = tour.is_active ? 'Активен' : 'Скрыт';
      header.appendChild(title);
      header.appendChild(badge);

      const body = document.createElement('div');
      body.className = 'card-body';
      const typeLine = document.createElement('div');
      typeLine.textContent = 'Тип: ' + tour.type;
      const priceLine = document.createElement('div');
      priceLine.textContent = 'Цена от: ' + (tour.price_from ?? '-') + ' ₽';
      const durationLine = document.createElement('div');
      durationLine.textContent = 'Длительность: ' + (tour.duration_hours ?? '-') + ' ч';
      const descLine = document.createElement('div');
      descLine.textContent = 'Описание: ' + (tour.description ?? '');
      body.appendChild(typeLine);
      body.appendChild(priceLine);
      body.appendChild(durationLine);
      body.appendChild(descLine);

      const footer = document.createElement('div');
      footer.className = 'card-footer';

      const editBtn = document.createElement('button');
      editBtn.type = 'button';
      editBtn.className = 'btn btn-primary';
      editBtn.textContent = 'Редактировать';
      editBtn.addEventListener('click', () => openEditTourModal(tour));

      const toggleBtn = document.createElement('button');
      toggleBtn.type = 'button';
      toggleBtn.className = 'btn btn-outline';
      toggleBtn.textContent = tour.is_active ? 'Скрыть' : 'Показать';
      toggleBtn.addEventListener('click', async () => {
        try {
          await api('/admin/api/tours/' + tour.id, {
            method: 'PATCH',
            body: JSON.stringify({ is_active: !tour.is_active })
          });
          showSuccess('Тур обновлён');
          loadTours();
        } catch {}
      });

      footer.appendChild(editBtn);
      footer.appendChild(toggleBtn);

      card.appendChild(header);
      card.appendChild(body);
      card.appendChild(footer);
      return card;
    };

    const loadTours = async () => {
      toursListEl.textContent = 'Загрузка туров...';
      try {
        const tours = await api('/admin/api/tours');
        if (!tours || !tours.length) {
          toursListEl.textContent = 'Туров пока нет.';
          return;
        }
        toursListEl.textContent = '';
        tours.forEach((tour) => toursListEl.appendChild(tourCard(tour)));
      } catch {
        toursListEl.textContent = '';
      }
    };

    createForm.addEventListener('submit', async (event) => {
      event.preventDefault();

      const title = document.getElementById('new-title').value.trim();
      const type = document.getElementById('new-type').value;
      const price = document.getElementById('new-price').value;
      const duration = document.getElementById('new-duration').value;
      const description = document.getElementById('new-description').value.trim();
      const isActive = document.getElementById('new-active').checked;
      const fileInput = document.getElementById('new-image');

      if (!title || !type) {
        showError('Заполните хотя бы название и тип тура.');
        return;
      }

      try {
        if (fileInput.files && fileInput.files.length > 0) {
          const form = new FormData();
          form.append('title', title);
          form.append('type', type);
          form.append('price_from', price);
          form.append('duration_hours', duration);
          form.append('description', description);
          form.append('is_active', isActive ? 'true' : 'false');
          form.append('image', fileInput.files[0]);
          await api('/admin/api/tours', { method: 'POST', body: form });
        } else {
          await api('/admin/api/tours', {
            method: 'POST',
            body: JSON.stringify({
              title,
              type,
              price_from: price,
              duration_hours: duration,
              description,
              is_active: isActive
            })
          });
        }
        showSuccess('Тур создан');
        createForm.reset();
        document.getElementById('new-active').checked = true;
        loadTours();
      } catch {}
    });

    // --- модалка редактирования ---

    const openEditTourModal = (tour) => {
      currentEditTourId = tour.id;
      document.getElementById('edit-title').value = tour.title || '';
      document.getElementById('edit-type').value = tour.type || 'excursion';
      document.getElementById('edit-price').value = tour.price_from ?? '';
      document.getElementById('edit-duration').value = tour.duration_hours ?? '';
      document.getElementById('edit-description').value = tour.description || '';
      tourModal.classList.remove('hidden');
    };

    const closeEditTourModal = () => {
      currentEditTourId = null;
      tourModal.classList.add('hidden');
    };

    document.getElementById('modal-cancel-btn').addEventListener('click', closeEditTourModal);
    tourModal.querySelector('.modal-backdrop').addEventListener('click', closeEditTourModal);
    document.addEventListener('keydown', (event) => {
      if (event.key === 'Escape' && !tourModal.classList.contains('hidden')) {
        closeEditTourModal();
      }
    });

    editForm.addEventListener('submit', async (event) => {
      event.preventDefault();
      if (!currentEditTourId) {
        return;
      }

      const title = document.getElementById('edit-title').value.trim();
      const type = document.getElementById('edit-type').value;
      if (!title || !type) {
        showError('Название и тип тура обязательны.');
        return;
      }

      try {
        await api('/admin/api/tours/' + currentEditTourId, {
          method: 'PATCH',
          body: JSON.stringify({
            title,
            type,
            price_from: document.getElementById('edit-price').value,
            duration_hours: document.getElementById('edit-duration').value,
            description: document.getElementById('edit-description').value
          })
        });
        showSuccess('Тур обновлён');
        closeEditTourModal();
        loadTours();
      } catch {}
    });

    // --- заявки ---

    const STATUS_ACTIONS = [
      { status: 'confirmed', label: 'Подтвердить' },
      { status: 'done', label: 'Завершить' },
      { status: 'cancelled', label: 'Отменить' }
    ];

    const bookingCard = (booking) => {
      const card = document.createElement('div');
      card.className = 'card';

      const header = document.createElement('div');
      header.className = 'card-header';
      const title = document.createElement('div');
      title.className = 'card-title';
      title.textContent = '#' + booking.id + ' — ' + booking.tour_title;
      const status = document.createElement('div');
      status.className = 'card-tag';
      status.textContent = booking.status;
      header.appendChild(title);
      header.appendChild(status);

      const meta = document.createElement('div');
      meta.className = 'card-tag';
      meta.textContent =
        new Date(booking.date_time).toLocaleString('ru-RU') + ' · ' + booking.people_count + ' чел.';

      const body = document.createElement('div');
      body.className = 'card-body';
      const client = document.createElement('div');
      client.textContent = 'Клиент: ' + booking.client_name + ' (' + booking.client_phone + ')';
      const comment = document.createElement('div');
      comment.textContent = 'Комментарий: ' + (booking.comment ?? '-');
      body.appendChild(client);
      body.appendChild(comment);

      const footer = document.createElement('div');
      footer.className = 'card-footer';
      STATUS_ACTIONS.forEach(({ status: next, label }) => {
        const btn = document.createElement('button');
        btn.type = 'button';
        btn.className = 'btn btn-outline';
        btn.textContent = label;
        btn.addEventListener('click', async () => {
          try {
            await api('/admin/api/bookings/' + booking.id, {
              method: 'PATCH',
              body: JSON.stringify({ status: next })
            });
            showSuccess('Статус #' + booking.id + ' → ' + next);
            loadBookings();
          } catch {}
        });
        footer.appendChild(btn);
      });

      card.appendChild(header);
      card.appendChild(meta);
      card.appendChild(body);
      card.appendChild(footer);
      return card;
    };

    const loadBookings = async () => {
      bookingsListEl.textContent = 'Загрузка заявок...';
      try {
        const query = currentStatusFilter ? '?status=' + currentStatusFilter : '';
        const bookings = await api('/admin/api/bookings' + query);
        if (!bookings || !bookings.length) {
          bookingsListEl.textContent = 'Заявок пока нет.';
          return;
        }
        bookingsListEl.textContent = '';
        bookings.forEach((booking) => bookingsListEl.appendChild(bookingCard(booking)));
      } catch {
        bookingsListEl.textContent = '';
      }
    };

    document.querySelectorAll('.filter-btn').forEach((btn) => {
      btn.addEventListener('click', () => {
        document.querySelectorAll('.filter-btn').forEach((other) => other.classList.remove('active'));
        btn.classList.add('active');
        currentStatusFilter = btn.dataset.status || '';
        loadBookings();
      });
    });

    // --- старт ---

    (async () => {
      try {
        const res = await fetch('/admin/api/session');
        const session = await res.json();
        if (session.present) {
          setStatus('Токен задан, подключение...');
        } else {
          setStatus('Токен не задан');
          openTokenPanel();
        }
      } catch {
        setStatus('Нет связи с сервером');
      }
      loadTours();
    })();
  </script>
</body>
</html>
"#;
